//! HTTP record store client
//!
//! Endpoints (relative to the configured base URL):
//! - `GET /analyses/?<query>`: list/search
//! - `GET /topics/`: topic vocabulary
//! - `DELETE /analyses/<id>`: delete by id
//! - `POST /analyze`: submit text for analysis

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::debug;
use ureq::Agent;

use super::RecordStore;
use crate::config::ClientConfig;
use crate::error::{KexError, Result};
use crate::query::QueryPairs;
use crate::record::AnalysisRecord;
use crate::topic::Topic;
use crate::trace_time;

/// Topic endpoint payload; a bare array is accepted as well.
#[derive(Deserialize)]
#[serde(untagged)]
enum TopicsResponse {
    Wrapped { topics: Vec<Topic> },
    Bare(Vec<Topic>),
}

/// Blocking HTTP client for the record store
pub struct HttpRecordStore {
    base_url: String,
    agent: Agent,
    user_agent: String,
}

impl HttpRecordStore {
    pub fn new(config: &ClientConfig) -> Self {
        let agent_config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_seconds)))
            .http_status_as_error(false)
            .build();

        Self {
            base_url: config.backend_url.trim_end_matches('/').to_string(),
            agent: Agent::new_with_config(agent_config),
            user_agent: format!(
                "kex/{} ({})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ),
        }
    }

    /// URL used for a list/search request
    pub fn list_url(&self, query: &QueryPairs) -> String {
        let encoded = query.encode();
        if encoded.is_empty() {
            format!("{}/analyses/", self.base_url)
        } else {
            format!("{}/analyses/?{}", self.base_url, encoded)
        }
    }

    fn get_text(&self, url: &str) -> Result<String> {
        let start = Instant::now();
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| transport(url, e))?;
        check_status(url, response.status().as_u16())?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| transport(url, e))?;
        trace_time!(start, "http_get", bytes = body.len());
        Ok(body)
    }
}

fn transport(url: &str, error: impl std::fmt::Display) -> KexError {
    KexError::Transport {
        url: url.to_string(),
        reason: error.to_string(),
    }
}

fn check_status(url: &str, status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(KexError::Status {
            status,
            url: url.to_string(),
        })
    }
}

impl RecordStore for HttpRecordStore {
    fn list(&self, query: &QueryPairs) -> Result<Vec<AnalysisRecord>> {
        let url = self.list_url(query);
        debug!(%url, "list_analyses");
        let body = self.get_text(&url).map_err(KexError::query_failed)?;
        serde_json::from_str(&body).map_err(KexError::query_failed)
    }

    fn topics(&self) -> Result<Vec<Topic>> {
        let url = format!("{}/topics/", self.base_url);
        let to_unavailable = |e: KexError| KexError::CatalogUnavailable {
            reason: e.to_string(),
        };
        let body = self.get_text(&url).map_err(to_unavailable)?;
        let parsed: TopicsResponse =
            serde_json::from_str(&body).map_err(|e| to_unavailable(e.into()))?;
        Ok(match parsed {
            TopicsResponse::Wrapped { topics } | TopicsResponse::Bare(topics) => topics,
        })
    }

    fn delete(&self, id: &str) -> Result<()> {
        let url = format!("{}/analyses/{}", self.base_url, urlencoding::encode(id));
        debug!(%url, "delete_analysis");
        let response = self
            .agent
            .delete(&url)
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(|e| KexError::delete_failed(id, transport(&url, e)))?;
        check_status(&url, response.status().as_u16())
            .map_err(|e| KexError::delete_failed(id, e))
    }

    fn analyze(&self, text: &str) -> Result<AnalysisRecord> {
        let url = format!("{}/analyze", self.base_url);
        let to_failed = |e: KexError| KexError::AnalyzeFailed {
            reason: e.to_string(),
        };
        let payload = serde_json::json!({ "text": text }).to_string();
        let mut response = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("User-Agent", self.user_agent.as_str())
            .send(payload.as_str())
            .map_err(|e| to_failed(transport(&url, e)))?;
        check_status(&url, response.status().as_u16()).map_err(to_failed)?;
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| to_failed(transport(&url, e)))?;
        serde_json::from_str(&body).map_err(|e| to_failed(e.into()))
    }
}
