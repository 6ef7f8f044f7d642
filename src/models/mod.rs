//! Phone book data model.
//!
//! A [`Record`] holds one contact's phone numbers and the [`AddressBook`]
//! stores records by contact name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
