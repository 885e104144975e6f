//! Human-readable output formatting for result listings

use super::{noun, Listing};
use crate::cli::Cli;
use kex_core::record::AnalysisRecord;
use kex_core::view::{CappedList, RecordView};

/// Empty-state message for a search with no matches
pub const NO_MATCHES: &str = "No analyses match your search criteria";

/// Output in human-readable format
pub fn output_human(cli: &Cli, listing: &Listing) {
    if let Some(id) = listing.deleted {
        if !cli.quiet {
            println!("Deleted analysis {}", id);
            println!();
        }
    }

    let records = listing.session.results();
    if records.is_empty() {
        if !cli.quiet {
            println!("{}", NO_MATCHES);
        }
        return;
    }

    if !cli.quiet {
        println!("{}", found_header(records.len()));
    }

    for record in records {
        println!();
        print_record(&listing.session.view().render(record));
    }
}

/// "Found N analyses matching your criteria"
pub fn found_header(count: usize) -> String {
    format!("Found {} {} matching your criteria", count, noun(count))
}

/// Heading line: title (when present) and id
pub fn heading(record: &AnalysisRecord) -> String {
    match record.title.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(title) => format!("{} [{}]", title, record.id),
        None => format!("[{}]", record.id),
    }
}

/// Creation date and time, UTC
pub fn created_label(record: &AnalysisRecord) -> String {
    record.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Comma-joined tags followed by the "+N more" indicator when present
pub fn tag_line(list: &CappedList) -> String {
    let mut line = if list.shown.is_empty() {
        "-".to_string()
    } else {
        list.shown.join(", ")
    };
    if let Some(more) = list.more_label() {
        line.push(' ');
        line.push_str(&more);
    }
    line
}

fn print_record(view: &RecordView) {
    let record = view.record;
    println!("{}", heading(record));
    println!(
        "  {}  Sentiment: {}",
        created_label(record),
        record.sentiment.label()
    );
    println!("  {}", view.summary);
    println!("  Topics: {}", tag_line(&view.topics));
    println!("  Keywords: {}", tag_line(&view.keywords));

    if let Some(text) = view.original_text {
        println!("  Original text:");
        for line in text.lines() {
            println!("    {}", line);
        }
    }
}
