//! A single phone book entry.

use crate::domain::{Name, PhoneNumber, ValidationError};
use std::fmt;

/// One contact: a name and its phone numbers in insertion order.
///
/// Duplicate phone numbers are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first phone number equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::PhoneNotFound` if the record does not hold it.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> Result<PhoneNumber, ValidationError> {
        let index = self
            .phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| ValidationError::PhoneNotFound(phone.as_str().to_string()))?;
        Ok(self.phones.remove(index))
    }

    pub fn clear_phones(&mut self) {
        self.phones.clear();
    }

    /// Phone numbers joined with `", "`; empty when the record has none.
    pub fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

// Renders as `name: phone1, phone2`
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.joined_phones())
    }
}
