//! Kex - terminal client for a text-analysis record store
//!
//! Composes keyword, sentiment and topic filters into store queries,
//! renders matching analyses and hosts an interactive topic picker.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, Commands, OutputFormat};
use kex_core::error::{ExitCode as KexExitCode, KexError};
use kex_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` exists; honor a raw `--format json`.
            if argv_format_json {
                let kex_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        KexError::UsageError(err.to_string())
                    }
                    clap::error::ErrorKind::ArgumentConflict => KexError::DuplicateFormat,
                    _ => KexError::Other(err.to_string()),
                };

                eprintln!("{}", kex_error.to_json());
                return ExitCode::from(kex_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    // The browser owns the terminal; it only logs when asked to.
    let is_browse = matches!(cli.command, Some(Commands::Browse(_)));
    if !is_browse || cli.logging_requested() {
        if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json)
        {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(KexExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
