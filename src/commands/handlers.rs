//! Command handlers.
//!
//! Handlers never touch the console: the dispatch loop collects the inputs a
//! command declares and passes them in a [`CommandArgs`].

use super::registry::{CommandRegistry, InputKind};
use crate::domain::{Name, PhoneNumber, ValidationError};
use crate::error::AssistantResult;
use crate::messages;
use crate::models::{AddressBook, Record};

/// What the dispatch loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Print the text and read the next command.
    Continue(String),
    /// Print the text and end the session.
    Terminate(String),
}

impl CommandOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Continue(text) | Self::Terminate(text) => text,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminate(_))
    }
}

/// Inputs collected for one command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandArgs {
    name: Option<String>,
    phone: Option<String>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Store the answer to a prompt.
    pub fn set(&mut self, kind: InputKind, value: String) {
        match kind {
            InputKind::Name => self.name = Some(value),
            InputKind::Phone => self.phone = Some(value),
        }
    }

    pub fn get(&self, kind: InputKind) -> Option<&str> {
        match kind {
            InputKind::Name => self.name.as_deref(),
            InputKind::Phone => self.phone.as_deref(),
        }
    }

    fn require(&self, kind: InputKind) -> Result<&str, ValidationError> {
        self.get(kind)
            .ok_or(ValidationError::MissingInput(kind.label()))
    }
}

/// State a handler may read or mutate.
pub struct CommandContext<'a> {
    pub book: &'a mut AddressBook,
    pub registry: &'a CommandRegistry,
}

pub fn hello(ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> AssistantResult<CommandOutcome> {
    Ok(CommandOutcome::Continue(format!(
        "{}\n{}",
        messages::GREETING,
        ctx.registry.describe()
    )))
}

/// Create a record with one phone, replacing any record with the same name.
pub fn add(ctx: &mut CommandContext<'_>, args: &CommandArgs) -> AssistantResult<CommandOutcome> {
    let name = args.require(InputKind::Name)?;
    let phone = PhoneNumber::new(args.require(InputKind::Phone)?)?;

    let message = messages::contact_added(name, phone.as_str());
    let mut record = Record::new(Name::new(name));
    record.add_phone(phone);
    ctx.book.add_record(record);

    tracing::debug!(name = %name, "Contact added");
    Ok(CommandOutcome::Continue(message))
}

/// Replace all phones of an existing record with one new phone.
///
/// The new phone is validated before anything is cleared.
pub fn change(ctx: &mut CommandContext<'_>, args: &CommandArgs) -> AssistantResult<CommandOutcome> {
    let name = args.require(InputKind::Name)?;
    let record = ctx.book.lookup_mut(name)?;
    let phone = PhoneNumber::new(args.require(InputKind::Phone)?)?;

    record.clear_phones();
    record.add_phone(phone);

    Ok(CommandOutcome::Continue(messages::phone_changed(name)))
}

pub fn remove_phone(
    ctx: &mut CommandContext<'_>,
    args: &CommandArgs,
) -> AssistantResult<CommandOutcome> {
    let name = args.require(InputKind::Name)?;
    let record = ctx.book.lookup_mut(name)?;
    let phone = PhoneNumber::new(args.require(InputKind::Phone)?)?;

    record.remove_phone(&phone)?;

    Ok(CommandOutcome::Continue(messages::phone_removed(
        name,
        phone.as_str(),
    )))
}

pub fn remove_record(
    ctx: &mut CommandContext<'_>,
    args: &CommandArgs,
) -> AssistantResult<CommandOutcome> {
    let name = args.require(InputKind::Name)?;
    if ctx.book.remove_record(name).is_none() {
        tracing::debug!(name = %name, "No record to remove");
    }
    Ok(CommandOutcome::Continue(messages::record_removed(name)))
}

pub fn phone(ctx: &mut CommandContext<'_>, args: &CommandArgs) -> AssistantResult<CommandOutcome> {
    let name = args.require(InputKind::Name)?;
    let record = ctx.book.lookup(name)?;
    Ok(CommandOutcome::Continue(record.joined_phones()))
}

pub fn show_all(
    ctx: &mut CommandContext<'_>,
    _args: &CommandArgs,
) -> AssistantResult<CommandOutcome> {
    let lines: Vec<String> = ctx
        .book
        .entries()
        .map(|(_, record)| record.to_string())
        .collect();
    Ok(CommandOutcome::Continue(lines.join("\n")))
}

pub fn exit(_ctx: &mut CommandContext<'_>, _args: &CommandArgs) -> AssistantResult<CommandOutcome> {
    Ok(CommandOutcome::Terminate(messages::FAREWELL.to_string()))
}
