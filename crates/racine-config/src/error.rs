//! Error types for configuration loading.

use thiserror::Error;

/// Result alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Primary error type for configuration operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable held a value that failed validation.
    #[error("invalid configuration field")]
    InvalidField {
        /// Environment variable that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The host allow-list contained no usable entries.
    #[error("allowed hosts list is empty")]
    EmptyHostList {
        /// Raw value supplied by the caller.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_are_constant() {
        let invalid = ConfigError::InvalidField {
            field: "RACINE_DEBUG",
            value: "maybe".to_string(),
            reason: "expected_boolean",
        };
        assert_eq!(invalid.to_string(), "invalid configuration field");

        let empty = ConfigError::EmptyHostList {
            value: " , ".to_string(),
        };
        assert_eq!(empty.to_string(), "allowed hosts list is empty");
    }
}
