//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use kex_core::config::{ClientConfig, ResolvedConfig};
use kex_core::error::Result;
use kex_core::store::HttpRecordStore;
use kex_core::view::RenderPolicy;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub resolved: &'a ResolvedConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, resolved: &'a ResolvedConfig, start: Instant) -> Self {
        Self {
            cli,
            resolved,
            start,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.resolved.config
    }

    /// HTTP client for the configured record store
    pub fn store(&self) -> HttpRecordStore {
        HttpRecordStore::new(self.config())
    }

    pub fn policy(&self) -> RenderPolicy {
        RenderPolicy::from(self.config())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Banner shown when no subcommand is provided
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("kex {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Filter, browse and manage stored text analyses.");
        println!();
        println!("Run `kex --help` for usage information, or `kex browse` to start.");
        Ok(())
    }
}
