//! The state machine engine.
//!
//! Owns the type-keyed node registry, the global transition list and the
//! active node, and resolves at most one transition per tick.
//!
//! # Key Concepts
//!
//! - **Nodes**: one per state kind, created the first time a kind is seen
//! - **Local transitions**: tried only while their source node is active
//! - **Any transitions**: tried every tick, before local ones
//! - **Handles**: `TransitionId` and `StateRef` stay valid for the machine's lifetime

mod engine;
mod error;
mod graph;
mod handle;

pub use engine::{StateMachine, StepResult};
pub use error::MachineError;
pub use handle::{StateRef, TransitionId};
