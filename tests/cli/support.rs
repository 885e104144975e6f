use assert_cmd::{cargo::cargo_bin_cmd, Command};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Get a Command for kex with an isolated config directory
pub fn kex(config_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("kex");
    cmd.env("KEX_CONFIG_DIR", config_dir.path())
        .env_remove("KEX_BACKEND_URL")
        .env_remove("BACKEND_URL")
        .env_remove("KEX_TIMEOUT")
        .env_remove("KEX_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Base URL nothing listens on
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// An analysis record as the store would return it
pub fn record_json(id: &str, title: Option<&str>, topics: &[&str], sentiment: &str) -> Value {
    json!({
        "id": id,
        "created_at": "2024-05-01T09:30:00",
        "updated_at": "2024-05-01T09:30:00",
        "original_text": format!("Original text of {}.", id),
        "title": title,
        "summary": format!("Summary of {}.", id),
        "topics": topics,
        "sentiment": sentiment,
        "keywords": ["revenue", "growth", "outlook", "margin"],
    })
}

/// Canned responses served by [`StubStore`]
pub struct Canned {
    /// Body for `GET /analyses/`; `None` answers 500
    pub list: Option<Value>,
    /// Body for `GET /topics/`; `None` answers 500
    pub topics: Option<Value>,
    /// Status for `DELETE /analyses/{id}`
    pub delete_status: u16,
    /// Body for `POST /analyze`
    pub analyze: Value,
}

impl Default for Canned {
    fn default() -> Self {
        Self {
            list: Some(json!([])),
            topics: Some(json!({"topics": ["ai", "nlp", "finance"]})),
            delete_status: 204,
            analyze: record_json("new1", Some("Fresh"), &["ai"], "positive"),
        }
    }
}

fn json_or_error(body: Option<Value>) -> ResponseTemplate {
    match body {
        Some(body) => ResponseTemplate::new(200).set_body_json(body),
        None => ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})),
    }
}

/// Mock record store answering the four store endpoints
pub struct StubStore {
    server: MockServer,
}

impl StubStore {
    pub async fn start(canned: Canned) -> Self {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/analyses/"))
            .respond_with(json_or_error(canned.list))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/topics/"))
            .respond_with(json_or_error(canned.topics))
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path_regex(r"^/analyses/.+$"))
            .respond_with(ResponseTemplate::new(canned.delete_status))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(ResponseTemplate::new(200).set_body_json(canned.analyze))
            .mount(&server)
            .await;

        Self { server }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Requests received so far, in arrival order
    pub async fn requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// "METHOD path[?query]" for every request received
    pub async fn request_lines(&self) -> Vec<String> {
        self.requests()
            .await
            .iter()
            .map(|r| match r.url.query() {
                Some(query) => format!("{} {}?{}", r.method, r.url.path(), query),
                None => format!("{} {}", r.method, r.url.path()),
            })
            .collect()
    }
}
