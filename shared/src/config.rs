use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Delay before an opened panel relaxes to `height: auto`.
/// Should match the CSS transition duration on `.accordion-content-wrapper`.
pub const DEFAULT_TRANSITION_MS: u32 = 150;
pub const MAX_TRANSITION_MS: u32 = 10_000;
pub const DEFAULT_ID_PREFIX: &str = "accordion-content";

/// Per-block configuration, read from the block's `data-accordion-config`
/// attribute. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    pub transition_ms: u32,
    pub open_first: bool,
    pub id_prefix: Option<String>,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            open_first: true,
            id_prefix: None,
        }
    }
}

impl AccordionConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transition_ms > MAX_TRANSITION_MS {
            return Err(ConfigError::TransitionTooLong(self.transition_ms));
        }
        if let Some(ref prefix) = self.id_prefix {
            if prefix.is_empty() || prefix.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidIdPrefix(prefix.clone()));
            }
        }
        Ok(())
    }

    pub fn id_prefix(&self) -> &str {
        self.id_prefix.as_deref().unwrap_or(DEFAULT_ID_PREFIX)
    }

    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = Some(prefix.into());
        self
    }
}
