//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Every `CommandError` renders as the exact line shown to the user.

use crate::domain::ValidationError;
use thiserror::Error;

/// Broad classification of a command failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input: a bad field value or the wrong number of arguments.
    Validation,
    /// A contact or phone required by the command does not exist.
    NotFound,
    /// Anything else.
    Unknown,
}

/// Errors that can occur while executing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The command received the wrong number of arguments
    #[error("Not enough arguments.")]
    ArgumentCount { expected: usize, got: usize },

    /// No record exists for the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The record has no phone with the given value
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// Unclassified failure
    #[error("Error: {0}")]
    Unknown(String),
}

impl CommandError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::ArgumentCount { .. } => ErrorKind::Validation,
            Self::ContactNotFound | Self::PhoneNotFound(_) => ErrorKind::NotFound,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = CommandError::ArgumentCount {
            expected: 2,
            got: 1,
        };
        assert_eq!(err.to_string(), "Not enough arguments.");

        assert_eq!(CommandError::ContactNotFound.to_string(), "Contact not found.");

        let err = CommandError::PhoneNotFound("1112223333".to_string());
        assert_eq!(err.to_string(), "Phone 1112223333 not found");

        let err = CommandError::Unknown("boom".to_string());
        assert_eq!(err.to_string(), "Error: boom");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: unknown level");
    }

    #[test]
    fn test_error_kinds() {
        let invalid = CommandError::from(ValidationError::InvalidPhone("1".to_string()));
        assert_eq!(invalid.kind(), ErrorKind::Validation);
        assert_eq!(
            CommandError::ArgumentCount {
                expected: 1,
                got: 0
            }
            .kind(),
            ErrorKind::Validation
        );
        assert_eq!(CommandError::ContactNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(
            CommandError::PhoneNotFound("x".to_string()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            CommandError::Unknown("x".to_string()).kind(),
            ErrorKind::Unknown
        );
    }
}
