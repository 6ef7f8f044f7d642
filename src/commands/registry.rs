//! Static command table.

use super::handlers::{self, CommandArgs, CommandContext, CommandOutcome};
use crate::error::AssistantResult;
use crate::messages;

/// Signature shared by every command handler.
pub type Handler = fn(&mut CommandContext<'_>, &CommandArgs) -> AssistantResult<CommandOutcome>;

/// Kind of value a prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Name,
    Phone,
}

impl InputKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
        }
    }
}

/// One interactive prompt issued before a command runs.
#[derive(Debug, Clone, Copy)]
pub struct Prompt {
    pub kind: InputKind,
    /// Prompt text; `{name}` is replaced with the name entered so far.
    pub text: &'static str,
}

impl Prompt {
    const fn name(text: &'static str) -> Self {
        Self {
            kind: InputKind::Name,
            text,
        }
    }

    const fn phone(text: &'static str) -> Self {
        Self {
            kind: InputKind::Phone,
            text,
        }
    }

    /// The prompt text with earlier answers substituted in.
    pub fn render(&self, args: &CommandArgs) -> String {
        self.text
            .replace("{name}", args.get(InputKind::Name).unwrap_or_default())
    }
}

/// A registered command.
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Inputs collected, in order, before the handler is invoked.
    pub prompts: &'static [Prompt],
    pub handler: Handler,
}

static COMMANDS: [CommandSpec; 8] = [
    CommandSpec {
        name: "hello",
        description: "Список доступних команд",
        prompts: &[],
        handler: handlers::hello,
    },
    CommandSpec {
        name: "add",
        description: "Додати новий контакт. Формат вводу: 'add' -> потім введіть ім'я -> введіть номер",
        prompts: &[
            Prompt::name(messages::ADD_NAME_PROMPT),
            Prompt::phone(messages::ADD_PHONE_PROMPT),
        ],
        handler: handlers::add,
    },
    CommandSpec {
        name: "change",
        description: "Змінити номер телефону вже існуючого контакту. Формат вводу: 'change' -> потім введіть ім'я -> введіть новий номер",
        prompts: &[
            Prompt::name(messages::CHANGE_NAME_PROMPT),
            Prompt::phone(messages::CHANGE_PHONE_PROMPT),
        ],
        handler: handlers::change,
    },
    CommandSpec {
        name: "remove_phone",
        description: "Видалити номер телефону існуючого контакту. Формат вводу: 'remove_phone' -> потім введіть ім'я -> введіть номер, який хочете видалити",
        prompts: &[
            Prompt::name(messages::REMOVE_PHONE_NAME_PROMPT),
            Prompt::phone(messages::REMOVE_PHONE_PHONE_PROMPT),
        ],
        handler: handlers::remove_phone,
    },
    CommandSpec {
        name: "remove_record",
        description: "Видалити контакт. Формат вводу: 'remove_record' -> потім введіть ім'я контакту",
        prompts: &[Prompt::name(messages::REMOVE_RECORD_NAME_PROMPT)],
        handler: handlers::remove_record,
    },
    CommandSpec {
        name: "phone",
        description: "Показати номери телефону контакту. Формат вводу: 'phone' -> потім введіть ім'я контакту",
        prompts: &[Prompt::name(messages::PHONE_NAME_PROMPT)],
        handler: handlers::phone,
    },
    CommandSpec {
        name: "show_all",
        description: "Показати всі контакти і їх номери телефону",
        prompts: &[],
        handler: handlers::show_all,
    },
    CommandSpec {
        name: "exit",
        description: "Вийти з програми",
        prompts: &[],
        handler: handlers::exit,
    },
];

/// Lookup table from command name to [`CommandSpec`].
#[derive(Clone, Copy)]
pub struct CommandRegistry {
    commands: &'static [CommandSpec],
}

impl CommandRegistry {
    /// The assistant's built-in commands.
    pub fn standard() -> Self {
        Self {
            commands: &COMMANDS,
        }
    }

    /// Find the command for a raw input line (trimmed, case-insensitive).
    pub fn resolve(&self, raw: &str) -> Option<&'static CommandSpec> {
        let key = raw.trim().to_lowercase();
        self.commands.iter().find(|command| command.name == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static CommandSpec> {
        self.commands.iter()
    }

    /// One `name: description` line per command, in table order.
    pub fn describe(&self) -> String {
        self.commands
            .iter()
            .map(|command| format!("{}: {}", command.name, command.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
