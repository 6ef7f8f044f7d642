//! Assistant commands.
//!
//! - **registry**: the static table of command names, descriptions and prompts
//! - **handlers**: one pure function per command

pub mod handlers;
pub mod registry;

pub use handlers::{CommandArgs, CommandContext, CommandOutcome};
pub use registry::{CommandRegistry, CommandSpec, Handler, InputKind, Prompt};
