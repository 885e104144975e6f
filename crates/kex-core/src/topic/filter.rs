//! Candidate filtering for the topic picker

use super::{SelectionSet, Topic, TopicCatalog};

/// Catalog topics eligible for display, in catalog order.
///
/// Selected topics are always excluded. A blank `search_term` keeps every
/// remaining topic; otherwise only topics containing the term as a
/// case-insensitive substring are kept.
pub fn candidates<'a>(
    catalog: &'a TopicCatalog,
    selection: &SelectionSet,
    search_term: &str,
) -> Vec<&'a Topic> {
    let unselected = catalog.iter().filter(|t| !selection.contains(t.as_str()));

    if search_term.trim().is_empty() {
        return unselected.collect();
    }

    let needle = search_term.to_lowercase();
    unselected.filter(|t| t.contains_folded(&needle)).collect()
}

/// First candidate whose whole text equals `search_term`, ignoring case.
pub fn exact_match<'a>(candidates: &[&'a Topic], search_term: &str) -> Option<&'a Topic> {
    candidates.iter().copied().find(|t| t.eq_folded(search_term))
}
