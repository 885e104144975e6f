//! Command dispatch logic for kex

use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use kex_core::config::ClientConfig;
use kex_core::error::Result;

mod command;
mod commands;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let mut resolved = ClientConfig::resolve()?;
    resolved.apply_flags(cli.backend.as_deref(), cli.timeout);

    debug!(elapsed = ?start.elapsed(), "resolve_config");

    let ctx = CommandContext::new(cli, &resolved, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
