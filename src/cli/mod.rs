//! CLI argument parsing for kex
//!
//! Global flags: --backend, --timeout, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};

pub use args::{AnalyzeArgs, DeleteArgs, FilterArgs, SearchArgs, TopicsArgs};
pub use kex_core::format::OutputFormat;
use parse::parse_format;

/// Kex - filter, browse and manage stored text analyses
#[derive(Parser, Debug)]
#[command(name = "kex")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Record store base URL
    #[arg(long, global = true, value_name = "URL")]
    pub backend: Option<String>,

    /// Request timeout in seconds (clamped to 1-300)
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format: human, json or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log debug detail to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter: a level (warn, debug, ...) or a full directive
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Whether logging was requested explicitly rather than by default.
    pub fn logging_requested(&self) -> bool {
        self.log_level.is_some() || self.log_json || self.verbose
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search stored analyses
    Search(SearchArgs),

    /// Print the store query a filter composes to (no network access)
    Compose(FilterArgs),

    /// List topics from the store vocabulary
    Topics(TopicsArgs),

    /// Delete an analysis, then re-run the search
    Delete(DeleteArgs),

    /// Submit text for analysis
    Analyze(AnalyzeArgs),

    /// Interactive terminal browser
    Browse(FilterArgs),

    /// Show the effective configuration
    Config,
}
