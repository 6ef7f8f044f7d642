//! Phone Book Assistant - an interactive console contact manager.
//!
//! Names and phone numbers are kept in memory for the lifetime of one
//! session. Commands are read one line at a time and dispatched to handlers
//! that mutate the address book.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `PhoneNumber`)
//! - **models**: `Record` and `AddressBook`
//! - **commands**: Command table and pure command handlers
//! - **assistant**: The dispatch loop and error translation
//! - **console**: Line-oriented input/output
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod assistant;
pub mod commands;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod messages;
pub mod models;

pub use assistant::Assistant;
pub use commands::{CommandArgs, CommandOutcome, CommandRegistry};
pub use config::Config;
pub use console::{Console, IoConsole};
pub use domain::{Name, PhoneNumber, ValidationError};
pub use error::{AssistantError, ConfigError};
pub use models::{AddressBook, Record};
