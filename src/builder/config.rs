//! Machine configuration.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// Default number of state changes kept in history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Settings applied when a machine is built.
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use tickfsm::builder::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{ "name": "npc-brain", "history_limit": 8 }"#).unwrap();
/// assert_eq!(config.name, "npc-brain");
/// assert_eq!(config.history_limit, Some(8));
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name used in logs and error messages
    pub name: String,

    /// Maximum number of state changes kept; `None` keeps everything
    pub history_limit: Option<usize>,

    /// Whether state changes are recorded at all
    pub record_history: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: "state-machine".to_string(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
            record_history: true,
        }
    }
}

impl MachineConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BuildError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the machine cannot honour.
    pub fn validate(&self) -> Result<(), BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::EmptyName);
        }
        if self.record_history && self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }
        Ok(())
    }
}
