//! PhoneNumber value object and the phone shape validator.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Optional `+`, optional 2-digit country code, 3-digit area code (parentheses
/// optional), then 7-10 digits, hyphens or spaces.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(\d{2})?\(?\d{3}\)?[\d\-\s]{7,10}$")
        .expect("Failed to compile phone number regex")
});

/// Check that `raw` has the shape of a phone number.
///
/// This is a shape check only: no per-country length rules are applied.
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` carrying the rejected input.
pub fn validate(raw: &str) -> Result<(), ValidationError> {
    if PHONE_REGEX.is_match(raw) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone(raw.to_string()))
    }
}

/// A validated phone number.
///
/// A `PhoneNumber` can only be obtained through [`PhoneNumber::new`], so an
/// invalid value is never held.
///
/// # Example
///
/// ```
/// use phone_book_assistant::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        validate(&phone)?;
        Ok(Self(phone))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
