//! Query composition
//!
//! A [`SearchFilter`] maps to an ordered list of `(name, value)` pairs. A
//! field whose condition is unmet is omitted entirely; no pair ever carries
//! an empty value. Pairs are emitted in the fixed order keyword, sentiment,
//! topics, limit.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::filter::SearchFilter;
use crate::topic::Topic;

/// Delimiter joining selected topics in the `topics` value.
pub const TOPIC_DELIMITER: &str = ",";

/// Query parameter names understood by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    Keyword,
    Sentiment,
    Topics,
    Limit,
}

impl QueryField {
    pub fn name(&self) -> &'static str {
        match self {
            QueryField::Keyword => "keyword",
            QueryField::Sentiment => "sentiment",
            QueryField::Topics => "topics",
            QueryField::Limit => "limit",
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Transport-level query: ordered, non-empty `(name, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(QueryField, String)>,
}

impl QueryPairs {
    pub fn get(&self, field: QueryField) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (QueryField, &str)> {
        self.pairs.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Percent-encode as an `application/x-www-form-urlencoded` style string.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(field, value)| format!("{}={}", field.name(), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    fn push(&mut self, field: QueryField, value: String) {
        if !value.is_empty() {
            self.pairs.push((field, value));
        }
    }
}

impl Serialize for QueryPairs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (field, value) in &self.pairs {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}

/// Compose the canonical query for `filter`.
pub fn compose(filter: &SearchFilter) -> QueryPairs {
    let mut query = QueryPairs::default();

    if let Some(keyword) = filter.keyword.as_deref().map(str::trim) {
        query.push(QueryField::Keyword, keyword.to_string());
    }

    if let Some(sentiment) = filter.sentiment {
        query.push(QueryField::Sentiment, sentiment.as_str().to_string());
    }

    if !filter.topics.is_empty() {
        let joined = filter
            .topics
            .iter()
            .map(Topic::as_str)
            .collect::<Vec<_>>()
            .join(TOPIC_DELIMITER);
        query.push(QueryField::Topics, joined);
    }

    if let Some(limit) = filter.limit {
        query.push(QueryField::Limit, limit.to_string());
    }

    query
}

/// Split a `topics` value back into topics, preserving order.
pub fn decode_topics(value: &str) -> Vec<Topic> {
    value
        .split(TOPIC_DELIMITER)
        .filter(|t| !t.is_empty())
        .map(Topic::from)
        .collect()
}
