//! JSON output formatting for result listings

use super::Listing;
use kex_core::error::Result;

/// Output in JSON format
pub fn output_json(listing: &Listing) -> Result<()> {
    let records = listing.session.results();
    let expanded: Vec<&str> = records
        .iter()
        .filter(|r| listing.session.view().is_expanded(&r.id))
        .map(|r| r.id.as_str())
        .collect();

    let mut output = serde_json::json!({
        "query": listing.query,
        "count": records.len(),
        "expanded": expanded,
        "results": records,
    });

    if let Some(id) = listing.deleted {
        if let Some(obj) = output.as_object_mut() {
            obj.insert("deleted".to_string(), serde_json::json!(id));
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
