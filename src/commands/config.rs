//! `kex config` command - show the effective configuration

use crate::cli::Cli;
use crate::output_by_format_result;
use kex_core::config::ResolvedConfig;
use kex_core::error::{KexError, Result};
use kex_core::records::escape_quotes;

/// Execute the config command
pub fn execute(cli: &Cli, resolved: &ResolvedConfig) -> Result<()> {
    output_by_format_result!(cli.format,
        json => output_json(resolved),
        human => { output_human(resolved)? },
        records => { output_records(resolved) }
    )
}

fn output_human(resolved: &ResolvedConfig) -> Result<()> {
    let body = toml::to_string_pretty(&resolved.config)
        .map_err(|e| KexError::failed("serialize config", e))?;

    println!("# config file: {}", resolved.source_display());
    println!("# backend_url from: {}", resolved.backend_source.as_str());
    println!("# timeout_seconds from: {}", resolved.timeout_source.as_str());
    print!("{}", body);
    Ok(())
}

fn output_json(resolved: &ResolvedConfig) -> Result<()> {
    let output = serde_json::json!({
        "source": resolved.source_display(),
        "file_loaded": resolved.file_loaded,
        "backend_source": resolved.backend_source,
        "timeout_source": resolved.timeout_source,
        "config": resolved.config,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(resolved: &ResolvedConfig) {
    let config = &resolved.config;
    println!(
        "H kex=1 records=1 mode=config source=\"{}\"",
        escape_quotes(&resolved.source_display())
    );
    println!(
        "C backend_url {} from={}",
        config.backend_url,
        resolved.backend_source.as_str()
    );
    println!(
        "C timeout_seconds {} from={}",
        config.timeout_seconds,
        resolved.timeout_source.as_str()
    );
    match config.default_limit {
        Some(limit) => println!("C default_limit {}", limit),
        None => println!("C default_limit -"),
    }
    println!("C summary_budget {}", config.summary_budget);
    println!("C collapsed_items {}", config.collapsed_items);
    println!("C expanded_items {}", config.expanded_items);
}
