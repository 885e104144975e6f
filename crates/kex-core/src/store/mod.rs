//! Record store access
//!
//! The store owns analysis records and the topic vocabulary. kex talks to it
//! through [`RecordStore`]; [`HttpRecordStore`] is the production client.

pub mod http;
#[cfg(test)]
pub mod memory;

use crate::error::Result;
use crate::query::QueryPairs;
use crate::record::AnalysisRecord;
use crate::topic::Topic;

pub use http::HttpRecordStore;

/// Operations the record store answers.
///
/// Implementations map failures onto the kex error taxonomy:
/// `QueryFailed` for `list`, `CatalogUnavailable` for `topics`,
/// `DeleteFailed` for `delete` and `AnalyzeFailed` for `analyze`.
pub trait RecordStore: Send + Sync {
    /// Records matching the composed query, in store order.
    fn list(&self, query: &QueryPairs) -> Result<Vec<AnalysisRecord>>;

    /// The full distinct topic vocabulary.
    fn topics(&self) -> Result<Vec<Topic>>;

    /// Delete one record by id.
    fn delete(&self, id: &str) -> Result<()>;

    /// Submit raw text for analysis, returning the newly created record.
    fn analyze(&self, text: &str) -> Result<AnalysisRecord>;
}
