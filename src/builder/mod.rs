//! Builder API and configuration for state machines.
//!
//! This module provides the fluent builder, the serde-backed configuration
//! it consumes, and the `unit_states!` declaration macro.

pub mod config;
pub mod error;
pub mod machine;
pub mod macros;

pub use config::{MachineConfig, DEFAULT_HISTORY_LIMIT};
pub use error::BuildError;
pub use machine::StateMachineBuilder;
