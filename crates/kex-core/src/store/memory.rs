//! In-memory record store used by unit tests

use std::sync::Mutex;

use chrono::{TimeZone, Utc};

use super::RecordStore;
use crate::error::{KexError, Result};
use crate::query::{decode_topics, QueryField, QueryPairs};
use crate::record::{AnalysisRecord, Sentiment};
use crate::topic::Topic;

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AnalysisRecord>>,
    pub topics: Vec<Topic>,
    pub fail_topics: bool,
    pub fail_list: bool,
    pub fail_delete: bool,
    list_calls: Mutex<Vec<QueryPairs>>,
}

impl MemoryStore {
    pub fn with_records(records: Vec<AnalysisRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    pub fn list_calls(&self) -> Vec<QueryPairs> {
        self.list_calls.lock().unwrap().clone()
    }

    pub fn record_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }
}

pub fn record(id: &str, sentiment: Sentiment, topics: &[&str]) -> AnalysisRecord {
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    AnalysisRecord {
        id: id.to_string(),
        created_at: at,
        updated_at: at,
        original_text: format!("original text of {}", id),
        title: Some(format!("Title {}", id)),
        summary: format!("summary of {}", id),
        topics: topics.iter().map(|t| Topic::from(*t)).collect(),
        sentiment,
        keywords: vec!["alpha".into(), "beta".into(), "gamma".into()],
    }
}

impl RecordStore for MemoryStore {
    fn list(&self, query: &QueryPairs) -> Result<Vec<AnalysisRecord>> {
        self.list_calls.lock().unwrap().push(query.clone());
        if self.fail_list {
            return Err(KexError::query_failed("status 500"));
        }
        let keyword = query.get(QueryField::Keyword).map(str::to_lowercase);
        let sentiment = query.get(QueryField::Sentiment);
        let topics = query.get(QueryField::Topics).map(decode_topics);
        let limit = query
            .get(QueryField::Limit)
            .and_then(|l| l.parse::<usize>().ok())
            .unwrap_or(usize::MAX);

        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                keyword.as_ref().map_or(true, |k| {
                    r.summary.to_lowercase().contains(k)
                        || r.original_text.to_lowercase().contains(k)
                })
            })
            .filter(|r| sentiment.map_or(true, |s| r.sentiment.as_str() == s))
            .filter(|r| {
                topics
                    .as_ref()
                    .map_or(true, |wanted| wanted.iter().any(|t| r.topics.contains(t)))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn topics(&self) -> Result<Vec<Topic>> {
        if self.fail_topics {
            return Err(KexError::CatalogUnavailable {
                reason: "status 503".into(),
            });
        }
        Ok(self.topics.clone())
    }

    fn delete(&self, id: &str) -> Result<()> {
        if self.fail_delete {
            return Err(KexError::delete_failed(id, "status 500"));
        }
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(KexError::delete_failed(id, "status 404"));
        }
        Ok(())
    }

    fn analyze(&self, text: &str) -> Result<AnalysisRecord> {
        let mut created = record("new", Sentiment::Neutral, &[]);
        created.original_text = text.to_string();
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }
}
