//! The interactive phone book assistant.
//!
//! [`Assistant`] owns the address book and runs the dispatch loop: read a
//! command, collect the inputs it declares, run its handler, print the result.

use crate::commands::{CommandArgs, CommandContext, CommandOutcome, CommandRegistry, CommandSpec};
use crate::console::Console;
use crate::error::AssistantResult;
use crate::messages;
use crate::models::AddressBook;
use tracing::{debug, info, warn};

/// A single assistant session.
pub struct Assistant {
    address_book: AddressBook,
    registry: CommandRegistry,
}

impl Assistant {
    pub fn new() -> Self {
        Self {
            address_book: AddressBook::new(),
            registry: CommandRegistry::standard(),
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Execute a command line with already collected inputs.
    ///
    /// Unknown commands yield the invalid-command text. Validation and lookup
    /// failures are translated to their fixed messages; other errors are
    /// returned.
    pub fn execute(&mut self, command: &str, args: &CommandArgs) -> AssistantResult<CommandOutcome> {
        match self.registry.resolve(command) {
            Some(spec) => self.dispatch(spec, args),
            None => Ok(CommandOutcome::Continue(messages::INVALID_COMMAND.to_string())),
        }
    }

    /// Run the handler of `spec`, translating recoverable errors.
    fn dispatch(&mut self, spec: &CommandSpec, args: &CommandArgs) -> AssistantResult<CommandOutcome> {
        debug!(command = spec.name, "Dispatching command");

        let mut ctx = CommandContext {
            book: &mut self.address_book,
            registry: &self.registry,
        };

        match (spec.handler)(&mut ctx, args) {
            Ok(outcome) => Ok(outcome),
            Err(err) => match err.user_message() {
                Some(message) => {
                    warn!(command = spec.name, error = %err, "Command failed");
                    Ok(CommandOutcome::Continue(message.to_string()))
                }
                None => Err(err),
            },
        }
    }

    /// Run the read-dispatch-print loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Io` if the console fails.
    pub fn run<C: Console>(&mut self, console: &mut C) -> AssistantResult<()> {
        info!("Assistant session started");

        loop {
            let Some(line) = console.read_line(messages::COMMAND_PROMPT)? else {
                info!("End of input, closing session");
                break;
            };

            let Some(spec) = self.registry.resolve(&line) else {
                debug!(input = %line.trim(), "Unknown command");
                console.write_line(messages::INVALID_COMMAND)?;
                continue;
            };

            let Some(args) = Self::collect_inputs(spec, console)? else {
                info!(command = spec.name, "End of input while collecting inputs");
                break;
            };

            let outcome = self.dispatch(spec, &args)?;
            console.write_line(outcome.message())?;

            if outcome.is_terminal() {
                break;
            }
        }

        info!(contacts = self.address_book.len(), "Assistant session finished");
        Ok(())
    }

    /// Ask every prompt of `spec` in order. `None` means input ended early.
    fn collect_inputs<C: Console>(
        spec: &CommandSpec,
        console: &mut C,
    ) -> AssistantResult<Option<CommandArgs>> {
        let mut args = CommandArgs::new();
        for prompt in spec.prompts {
            match console.read_line(&prompt.render(&args))? {
                Some(value) => args.set(prompt.kind, value),
                None => return Ok(None),
            }
        }
        Ok(Some(args))
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new()
    }
}
