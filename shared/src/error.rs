use thiserror::Error;

use crate::config::MAX_TRANSITION_MS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccordionError {
    #[error("Item {position} out of range (accordion has {len} items)")]
    ItemOutOfRange { position: usize, len: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid id prefix: {0:?}")]
    InvalidIdPrefix(String),
    #[error("Transition of {0}ms exceeds the {}ms limit", MAX_TRANSITION_MS)]
    TransitionTooLong(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AccordionError::ItemOutOfRange { position: 4, len: 3 };
        assert_eq!(err.to_string(), "Item 4 out of range (accordion has 3 items)");

        let err = ConfigError::TransitionTooLong(20_000);
        assert_eq!(err.to_string(), "Transition of 20000ms exceeds the 10000ms limit");

        let err = ConfigError::InvalidIdPrefix("my id".to_string());
        assert_eq!(err.to_string(), "Invalid id prefix: \"my id\"");
    }
}
