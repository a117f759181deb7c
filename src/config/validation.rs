//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees
//! syntactically. Validation is a pure function and reports all
//! problems, not just the first one.

use thiserror::Error;

use crate::config::schema::LoggerConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("max_entries must be at least 1")]
    ZeroCapacity,

    #[error("notify_interval_ms must be at least 1")]
    ZeroNotifyInterval,
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &LoggerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.max_entries == 0 {
        errors.push(ValidationError::ZeroCapacity);
    }
    if config.notify_interval_ms == 0 {
        errors.push(ValidationError::ZeroNotifyInterval);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&LoggerConfig::default()).is_ok());
    }

    #[test]
    fn all_errors_are_collected() {
        let config = LoggerConfig {
            max_entries: 0,
            notify_interval_ms: 0,
            ..LoggerConfig::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::ZeroCapacity));
    }
}
