//! The known topic vocabulary

use std::collections::HashSet;

use tracing::{debug, warn};

use super::Topic;
use crate::error::{KexError, Result};
use crate::store::RecordStore;

/// Ordered, immutable topic vocabulary for one selector session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

impl TopicCatalog {
    /// Build a catalog, keeping the first occurrence of any repeated topic.
    pub fn new(topics: impl IntoIterator<Item = Topic>) -> Self {
        let mut seen = HashSet::new();
        let topics = topics
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { topics }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Fetch the vocabulary from the store, degrading to an empty catalog.
    pub fn load(store: &dyn RecordStore) -> Self {
        Self::from_fetch(store.topics())
    }

    /// Turn a fetch outcome into a catalog.
    ///
    /// A failed fetch is logged and yields an empty catalog so keyword and
    /// sentiment filtering stay usable.
    pub fn from_fetch(result: Result<Vec<Topic>>) -> Self {
        match result {
            Ok(topics) => {
                let catalog = Self::new(topics);
                debug!(topic_count = catalog.len(), "topic_catalog_loaded");
                catalog
            }
            Err(err) => {
                let err = match err {
                    e @ KexError::CatalogUnavailable { .. } => e,
                    other => KexError::CatalogUnavailable {
                        reason: other.to_string(),
                    },
                };
                warn!(error = %err, "failed to fetch topics");
                Self::empty()
            }
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn iter(&self) -> impl Iterator<Item = &Topic> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
