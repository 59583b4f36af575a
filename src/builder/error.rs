//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when configuring a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Machine name is empty. Call .name(name) with a non-empty name")]
    EmptyName,

    #[error("History limit must be at least 1. Use .record_history(false) to disable history")]
    ZeroHistoryLimit,

    #[error("Invalid machine configuration: {0}")]
    InvalidConfig(String),
}
