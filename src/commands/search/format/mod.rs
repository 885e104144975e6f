//! Result listing output formatting modules

pub mod human;
pub mod json;
pub mod records;

pub use human::output_human;
pub use json::output_json;
pub use records::output_records;

use kex_core::query::QueryPairs;
use kex_core::session::SearchSession;

/// A rendered result list and how it was produced
pub struct Listing<'a> {
    /// Command name shown in records headers
    pub mode: &'a str,
    /// Id removed before the list was re-fetched
    pub deleted: Option<&'a str>,
    pub query: QueryPairs,
    pub session: &'a SearchSession,
}

impl<'a> Listing<'a> {
    pub fn new(mode: &'a str, session: &'a SearchSession) -> Self {
        Self {
            mode,
            deleted: None,
            query: session.last_query().cloned().unwrap_or_default(),
            session,
        }
    }

    pub fn with_deleted(mut self, id: &'a str) -> Self {
        self.deleted = Some(id);
        self
    }
}

/// "analysis" or "analyses"
pub fn noun(count: usize) -> &'static str {
    if count == 1 {
        "analysis"
    } else {
        "analyses"
    }
}
