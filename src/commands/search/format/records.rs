//! Records output formatting for result listings

use super::Listing;
use kex_core::record::AnalysisRecord;
use kex_core::records::{csv_or_dash, escape_quotes, single_line};

/// Output in records format
pub fn output_records(listing: &Listing) {
    let records = listing.session.results();
    let deleted = listing
        .deleted
        .map(|id| format!(" deleted={}", id))
        .unwrap_or_default();

    println!(
        "H kex=1 records=1 mode={} query=\"{}\" results={}{}",
        listing.mode,
        escape_quotes(&listing.query.encode()),
        records.len(),
        deleted
    );

    for record in records {
        let view = listing.session.view().render(record);
        println!("{}", record_line(record, view.expanded));
        println!("S {} {}", record.id, single_line(&view.summary));
    }
}

/// `R` line for one record
pub fn record_line(record: &AnalysisRecord, expanded: bool) -> String {
    format!(
        "R {} {} \"{}\" created={} topics={} keywords={} expanded={}",
        record.id,
        record.sentiment,
        escape_quotes(record.title.as_deref().unwrap_or("")),
        record.created_at.to_rfc3339(),
        csv_or_dash(&record.topics),
        csv_or_dash(&record.keywords),
        expanded
    )
}
