//! Error types for the phone book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing an assistant command.
#[derive(Error, Debug)]
pub enum AssistantError {
    /// User input failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No contact is stored under the given name
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Reading from or writing to the console failed
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssistantError {
    /// The fixed user-facing text for errors the dispatch loop recovers from.
    ///
    /// Returns `None` for errors that must end the session.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation(_) => Some(crate::messages::INPUT_ERROR),
            Self::NotFound(_) => Some(crate::messages::CONTACT_NOT_FOUND),
            Self::Io(_) => None,
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

/// Convenience type alias for Results with AssistantError
pub type AssistantResult<T> = Result<T, AssistantError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
