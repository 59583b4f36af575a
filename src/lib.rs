//! Tickfsm: a tick-driven finite state machine
//!
//! The host owns the update loop and calls [`StateMachine::update`] once per
//! tick. Each call resolves at most one transition, runs the exit/enter hooks
//! if the active state changes, and then runs the active state's update hook.
//!
//! # Core Concepts
//!
//! - **State**: any type implementing [`State`]; each type is one state kind,
//!   and a machine keeps one instance per kind (the first one registered)
//! - **Transitions**: predicate-guarded edges, either local to a source state
//!   or global ("any") and tried before local ones
//! - **Handles**: [`TransitionId`] and [`StateRef`] identify what was registered
//!
//! # Example
//!
//! ```rust
//! use tickfsm::{unit_states, StateMachine};
//!
//! unit_states! {
//!     struct Idle;
//!     struct Running;
//! }
//!
//! let mut machine = StateMachine::new();
//! machine.set_state(Idle);
//! let start = machine.add_transition(Idle, Running, || true);
//!
//! assert!(machine.has_current_transition(start));
//! machine.update().unwrap();
//! assert!(machine.is_current::<Running>());
//! assert!(machine.has_transition::<Idle>(start));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, MachineConfig, StateMachineBuilder};
pub use self::core::{Guard, HookState, Predicate, State, StateHistory, StateKind, StateTransition};
pub use machine::{MachineError, StateMachine, StateRef, StepResult, TransitionId};
