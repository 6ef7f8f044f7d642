//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names and phone numbers. A phone number is
//! validated at construction time, so invalid data cannot be represented in
//! a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
