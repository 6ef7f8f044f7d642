//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating user-supplied contact data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not have an accepted shape.
    InvalidPhone(String),

    /// The phone number is not stored on the record.
    PhoneNotFound(String),

    /// A required input was not supplied for the command.
    MissingInput(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Phone number {} is invalid", phone),
            Self::PhoneNotFound(phone) => write!(f, "Phone number {} is not on the record", phone),
            Self::MissingInput(field) => write!(f, "Missing required input: {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
