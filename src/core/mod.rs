//! Core state machine contracts.
//!
//! This module contains the pieces a host implements or hands to the machine:
//! - The `State` lifecycle contract and the `HookState` blackboard base
//! - `Predicate` guards for transitions
//! - Bounded history of state changes
//!
//! Nothing here drives a machine; see [`crate::machine`] for the engine.

mod guard;
mod history;
mod hooks;
mod state;

pub use guard::{Guard, Predicate};
pub use history::{StateHistory, StateTransition, TransitionCause};
pub use hooks::HookState;
pub use state::{AsAny, State, StateKind};
