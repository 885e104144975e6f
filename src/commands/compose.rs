//! `kex compose` command - show the store query a filter produces
//!
//! Purely local: nothing is sent to the record store.

use crate::cli::Cli;
use crate::output_by_format_result;
use kex_core::error::Result;
use kex_core::query::{QueryPairs, SearchFilter};

/// Execute the compose command
pub fn execute(cli: &Cli, filter: &SearchFilter) -> Result<()> {
    let query = filter.compose();

    output_by_format_result!(cli.format,
        json => output_json(&query),
        human => { output_human(cli, &query) },
        records => { output_records(&query) }
    )
}

fn output_human(cli: &Cli, query: &QueryPairs) {
    if query.is_empty() {
        if !cli.quiet {
            println!("No filters; the store returns every analysis");
        }
        return;
    }
    for (field, value) in query.iter() {
        println!("{} = {}", field, value);
    }
}

fn output_json(query: &QueryPairs) -> Result<()> {
    let output = serde_json::json!({
        "query": query,
        "encoded": query.encode(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_records(query: &QueryPairs) {
    println!("H kex=1 records=1 mode=compose pairs={}", query.len());
    println!("Q {}", query.encode());
}
