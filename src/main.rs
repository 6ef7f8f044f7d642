//! Phone Book Assistant - Main entry point
//!
//! Runs one interactive session on stdin/stdout. Diagnostics are written to
//! stderr so they never mix with the console protocol.

use anyhow::Result;
use phone_book_assistant::{Assistant, Config, IoConsole};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(log_level = %config.log_level, "Configuration loaded successfully");

    let mut assistant = Assistant::new();
    let mut console = IoConsole::stdio();

    if let Err(e) = assistant.run(&mut console) {
        error!("Assistant session aborted: {}", e);
        return Err(e.into());
    }

    Ok(())
}
