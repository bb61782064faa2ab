//! Dialogue configuration

use serde::Deserialize;

use super::error::ConfigValidationError;

/// Dialogue configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Trailing history entries checked before repeating a question
    #[serde(default = "default_recent_history_window")]
    pub recent_history_window: usize,
}

impl DialogueConfig {
    /// Validate dialogue configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.recent_history_window == 0 {
            return Err(ConfigValidationError::InvalidHistoryWindow);
        }
        Ok(())
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            recent_history_window: default_recent_history_window(),
        }
    }
}

fn default_recent_history_window() -> usize {
    5
}
