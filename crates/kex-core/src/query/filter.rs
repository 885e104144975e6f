//! The combined search filter

use std::num::NonZeroU32;

use crate::record::Sentiment;
use crate::topic::{SelectionSet, Topic};

use super::compose::{compose, QueryPairs};

/// Keyword, sentiment, topic selection and result limit used to query records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Free-text keyword
    pub keyword: Option<String>,
    /// Sentiment category
    pub sentiment: Option<Sentiment>,
    /// Selected topics, in selection order
    pub topics: SelectionSet,
    /// Maximum number of records to return
    pub limit: Option<NonZeroU32>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: Option<&str>) -> Self {
        self.keyword = keyword.map(str::to_string);
        self
    }

    pub fn with_sentiment(mut self, sentiment: Option<Sentiment>) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Set the topics; repeats collapse to their first occurrence.
    pub fn with_topics<I, T>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Topic>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_selection(mut self, selection: SelectionSet) -> Self {
        self.topics = selection;
        self
    }

    pub fn with_limit(mut self, limit: Option<NonZeroU32>) -> Self {
        self.limit = limit;
        self
    }

    /// Fill in `limit` when none was set explicitly.
    pub fn or_limit(mut self, fallback: Option<NonZeroU32>) -> Self {
        self.limit = self.limit.or(fallback);
        self
    }

    /// Compose the canonical query for this filter.
    pub fn compose(&self) -> QueryPairs {
        compose(self)
    }
}
