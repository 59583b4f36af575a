//! Errors raised by the state machine engine.

use thiserror::Error;

/// Programming errors surfaced by [`StateMachine`](super::StateMachine).
///
/// None of these are transient: retrying the same call without changing the
/// machine gives the same error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("State machine '{machine}' has no initial state. Call set_state() before update()")]
    Uninitialized { machine: String },

    #[error("Handle was created by another state machine than '{machine}'")]
    ForeignHandle { machine: String },
}
