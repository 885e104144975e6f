//! Search session: the displayed result set and its request ordering
//!
//! Every search is tagged with a generation number when issued. Only the
//! response for the most recently issued generation may replace the
//! displayed results; anything older is discarded as stale. Deletion never
//! edits the list locally: a successful delete re-issues the last composed
//! query so the list reflects the store.

use tracing::debug;

use crate::error::{KexError, Result};
use crate::query::{QueryPairs, SearchFilter};
use crate::record::AnalysisRecord;
use crate::store::RecordStore;
use crate::view::{RenderPolicy, ResultListView};

/// An issued search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub generation: u64,
    pub query: QueryPairs,
}

/// What happened to a search response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The response replaced the displayed results
    Applied { count: usize },
    /// A newer search was issued; the response was dropped
    Stale,
    /// The latest search failed; prior results are kept
    Failed { message: String },
}

/// What happened to a delete response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted; the caller must run `refresh` to re-fetch the list
    Deleted { refresh: QueryTicket },
    /// Not deleted; results are untouched
    Failed { message: String },
}

/// Result state for one interactive session
#[derive(Debug, Default)]
pub struct SearchSession {
    issued: u64,
    last_query: Option<QueryPairs>,
    results: Vec<AnalysisRecord>,
    has_searched: bool,
    pending: bool,
    error: Option<String>,
    view: ResultListView,
}

impl SearchSession {
    pub fn new(policy: RenderPolicy) -> Self {
        Self {
            view: ResultListView::new(policy),
            ..Self::default()
        }
    }

    /// Compose `filter` and issue it as the newest search.
    pub fn begin_search(&mut self, filter: &SearchFilter) -> QueryTicket {
        self.issue(filter.compose())
    }

    /// Record `filter` as the query a later refresh re-issues, without
    /// issuing it now.
    pub fn remember_query(&mut self, filter: &SearchFilter) {
        self.last_query = Some(filter.compose());
    }

    /// Re-issue the last composed query (or an unfiltered one).
    pub fn refresh(&mut self) -> QueryTicket {
        let query = self.last_query.clone().unwrap_or_default();
        self.issue(query)
    }

    fn issue(&mut self, query: QueryPairs) -> QueryTicket {
        self.issued += 1;
        self.pending = true;
        self.last_query = Some(query.clone());
        debug!(generation = self.issued, query = %query.encode(), "search_issued");
        QueryTicket {
            generation: self.issued,
            query,
        }
    }

    /// Apply a search response if it belongs to the latest issued search.
    pub fn complete_search(
        &mut self,
        generation: u64,
        response: Result<Vec<AnalysisRecord>>,
    ) -> SearchOutcome {
        if generation != self.issued {
            debug!(generation, latest = self.issued, "stale_search_response_dropped");
            return SearchOutcome::Stale;
        }
        self.pending = false;
        match response {
            Ok(records) => {
                let count = records.len();
                self.view.retain_present(&records);
                self.results = records;
                self.has_searched = true;
                self.error = None;
                SearchOutcome::Applied { count }
            }
            Err(err) => {
                let err = match err {
                    e @ KexError::QueryFailed { .. } => e,
                    other => KexError::query_failed(other),
                };
                let message = err.user_message();
                self.error = Some(message.clone());
                SearchOutcome::Failed { message }
            }
        }
    }

    /// Apply a delete response; success schedules a refresh.
    pub fn complete_delete(&mut self, id: &str, response: Result<()>) -> DeleteOutcome {
        match response {
            Ok(()) => {
                debug!(id, "analysis_deleted");
                self.error = None;
                DeleteOutcome::Deleted {
                    refresh: self.refresh(),
                }
            }
            Err(err) => {
                let err = match err {
                    e @ KexError::DeleteFailed { .. } => e,
                    other => KexError::delete_failed(id, other),
                };
                let message = err.user_message();
                self.error = Some(message.clone());
                DeleteOutcome::Failed { message }
            }
        }
    }

    /// Issue and complete a search against `store` on the current thread.
    pub fn search_with(
        &mut self,
        store: &dyn RecordStore,
        filter: &SearchFilter,
    ) -> Result<&[AnalysisRecord]> {
        let ticket = self.begin_search(filter);
        self.run_ticket(store, ticket)
    }

    /// Delete on the current thread, then re-fetch the last query.
    pub fn delete_with(&mut self, store: &dyn RecordStore, id: &str) -> Result<&[AnalysisRecord]> {
        let response = store.delete(id);
        let reason = response.as_ref().err().map(store_reason);
        match self.complete_delete(id, response) {
            DeleteOutcome::Deleted { refresh } => self.run_ticket(store, refresh).map_err(|e| {
                KexError::RefreshFailed {
                    id: id.to_string(),
                    reason: store_reason(&e),
                }
            }),
            DeleteOutcome::Failed { .. } => {
                Err(KexError::delete_failed(id, reason.unwrap_or_default()))
            }
        }
    }

    fn run_ticket(
        &mut self,
        store: &dyn RecordStore,
        ticket: QueryTicket,
    ) -> Result<&[AnalysisRecord]> {
        let response = store.list(&ticket.query);
        let reason = response.as_ref().err().map(store_reason);
        match self.complete_search(ticket.generation, response) {
            SearchOutcome::Applied { .. } => Ok(&self.results),
            SearchOutcome::Failed { .. } => Err(KexError::query_failed(
                reason.unwrap_or_default(),
            )),
            SearchOutcome::Stale => Err(KexError::Other("search superseded".to_string())),
        }
    }

    /// Drop results, error, expansion state and the remembered query (the
    /// form's "Clear").
    pub fn clear(&mut self) {
        self.results.clear();
        self.last_query = None;
        self.has_searched = false;
        self.error = None;
        self.view.clear();
        // Anything still in flight is now stale.
        self.issued += 1;
        self.pending = false;
    }

    pub fn results(&self) -> &[AnalysisRecord] {
        &self.results
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn last_query(&self) -> Option<&QueryPairs> {
        self.last_query.as_ref()
    }

    pub fn view(&self) -> &ResultListView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ResultListView {
        &mut self.view
    }
}

/// Underlying reason of a store failure, without the operation prefix.
fn store_reason(err: &KexError) -> String {
    match err {
        KexError::QueryFailed { reason } | KexError::DeleteFailed { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}
