//! Builder for configuring state machines.

use crate::builder::config::MachineConfig;
use crate::builder::error::BuildError;
use crate::machine::StateMachine;

/// Builder for configured state machines with a fluent API.
///
/// States and transitions are wired on the built machine; the builder only
/// covers settings.
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    config: MachineConfig,
}

impl StateMachineBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all settings with `config`.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Name used in logs and errors.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Keep at most `limit` history records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Keep every history record.
    pub fn unbounded_history(mut self) -> Self {
        self.config.history_limit = None;
        self
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Build the state machine.
    /// Returns an error if the settings are invalid.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        self.config.validate()?;
        Ok(StateMachine::with_config(&self.config))
    }
}
