//! Editor configuration.
//!
//! Every field has a default, so a host can load a partial JSON document:
//!
//! ```rust
//! use codepane_core::EditorConfig;
//!
//! let config = EditorConfig::from_json(r#"{ "max_history": 20 }"#).unwrap();
//! assert_eq!(config.max_history, 20);
//! assert_eq!(config.tab_text, "    ");
//! ```

use crate::history::{DEFAULT_DEBOUNCE, DEFAULT_MAX_HISTORY};
use codepane_lang::FoldStrategy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration loading failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for [`EditorConfig`].
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field has an unusable value.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// Field name.
        field: &'static str,
        /// What is wrong.
        reason: &'static str,
    },
}

/// Editor behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Text inserted by Tab and removed by Shift+Tab.
    pub tab_text: String,
    /// Maximum number of undo steps.
    pub max_history: usize,
    /// Milliseconds of typing inactivity before a history snapshot is taken.
    pub history_debounce_ms: u64,
    /// Auto-close brackets and quotes.
    pub auto_close_pairs: bool,
    /// Overrides the language's fold strategy.
    pub fold_strategy: Option<FoldStrategy>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_text: "    ".to_string(),
            max_history: DEFAULT_MAX_HISTORY,
            history_debounce_ms: DEFAULT_DEBOUNCE.as_millis() as u64,
            auto_close_pairs: true,
            fold_strategy: None,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_text.is_empty() {
            return Err(ConfigError::Invalid {
                field: "tab_text",
                reason: "must not be empty",
            });
        }
        if self.tab_text.contains('\n') {
            return Err(ConfigError::Invalid {
                field: "tab_text",
                reason: "must not contain a newline",
            });
        }
        if self.max_history == 0 {
            return Err(ConfigError::Invalid {
                field: "max_history",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Debounce as a [`Duration`].
    pub fn history_debounce(&self) -> Duration {
        Duration::from_millis(self.history_debounce_ms)
    }
}
