//! `kex analyze` command - submit text for analysis
//!
//! Text comes from `--text` or, when absent, from stdin. The returned
//! record is printed in full.

use std::io::{self, Read};
use std::time::Instant;

use tracing::debug;

use crate::cli::Cli;
use crate::commands::search::format::human::{created_label, heading};
use crate::commands::search::format::records::record_line;
use crate::output_by_format_result;
use kex_core::bail_usage;
use kex_core::error::Result;
use kex_core::record::AnalysisRecord;
use kex_core::records::single_line;
use kex_core::store::RecordStore;
use kex_core::trace_time;

/// Execute the analyze command
pub fn execute(cli: &Cli, store: &dyn RecordStore, text: Option<&str>) -> Result<()> {
    let text = match text {
        Some(text) => text.to_string(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    if text.trim().is_empty() {
        bail_usage!("Please enter some text to analyze");
    }

    let start = Instant::now();
    debug!(chars = text.chars().count(), "analyze_submit");
    let record = store.analyze(&text)?;
    trace_time!(start, "analyze", id = record.id.as_str());

    output_by_format_result!(cli.format,
        json => output_json(&record),
        human => { output_human(&record) },
        records => { output_records(&record) }
    )
}

fn output_human(record: &AnalysisRecord) {
    println!("{}", heading(record));
    println!();
    println!("Summary:");
    println!("  {}", record.summary);
    println!("Sentiment: {}", record.sentiment.label());
    println!("Key Topics: {}", joined(&record.topics));
    println!("Keywords: {}", joined(&record.keywords));
    println!("Created: {}", created_label(record));
    println!("ID: {}", record.id);
}

fn joined<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(", ")
}

fn output_json(record: &AnalysisRecord) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

fn output_records(record: &AnalysisRecord) {
    println!("H kex=1 records=1 mode=analyze id={}", record.id);
    println!("{}", record_line(record, true));
    println!("S {} {}", record.id, single_line(&record.summary));
    for topic in &record.topics {
        println!("T {}", topic);
    }
}
