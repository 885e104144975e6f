use crate::support::{kex, record_json, Canned, StubStore, UNREACHABLE};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

// ============================================================================
// Search command tests
// ============================================================================

fn two_records() -> Canned {
    Canned {
        list: Some(json!([
            record_json("a1", Some("Quarterly results"), &["finance", "ai", "nlp"], "positive"),
            record_json("b2", None, &[], "negative"),
        ])),
        ..Canned::default()
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_sends_composed_query() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "search"])
        .args(["-k", "supply chain", "-s", "negative", "-t", "ai", "-t", "nlp"])
        .assert()
        .success();

    assert_eq!(
        store.request_lines().await,
        vec!["GET /analyses/?keyword=supply%20chain&sentiment=negative&topics=ai%2Cnlp"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_without_filters_hits_bare_endpoint() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "search"])
        .assert()
        .success();

    assert_eq!(store.request_lines().await, vec!["GET /analyses/"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_empty_state() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "search", "-k", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No analyses match your search criteria"))
        .stdout(predicate::str::contains("Found").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_lists_collapsed_records() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(two_records()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 analyses matching your criteria"))
        .stdout(predicate::str::contains("Quarterly results [a1]"))
        .stdout(predicate::str::contains("[b2]"))
        .stdout(predicate::str::contains("2024-05-01 09:30:00 UTC  Sentiment: Positive"))
        .stdout(predicate::str::contains("Topics: finance, ai +1 more"))
        .stdout(predicate::str::contains("Keywords: revenue, growth +2 more"))
        .stdout(predicate::str::contains("Original text").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_expand_shows_original_text() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(two_records()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "search", "--expand", "a1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Original text of a1."))
        .stdout(predicate::str::contains("Topics: finance, ai, nlp"))
        .stdout(predicate::str::contains("Original text of b2.").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_json_output() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(two_records()).await;

    let output = kex(&dir)
        .args(["--backend", &store.url(), "--format", "json", "search"])
        .args(["-s", "positive", "--expand-all"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["query"]["sentiment"], "positive");
    assert_eq!(json["expanded"], json!(["a1", "b2"]));
    assert_eq!(json["results"][0]["id"], "a1");
    assert!(json.get("deleted").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_records_output() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(two_records()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "--format", "records", "search", "-k", "q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H kex=1 records=1 mode=search query=\"keyword=q\" results=2",
        ))
        .stdout(predicate::str::contains("R a1 positive \"Quarterly results\""))
        .stdout(predicate::str::contains("S a1 Summary of a1."));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_numeric_ids_from_store() {
    let dir = tempdir().unwrap();
    let mut numeric = record_json("x", Some("Numbered"), &[], "neutral");
    numeric["id"] = json!(42);
    let store = StubStore::start(Canned {
        list: Some(json!([numeric])),
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "search"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Numbered [42]"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_default_limit_from_config() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_limit = 25\n").unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "search"])
        .assert()
        .success();
    kex(&dir)
        .args(["--backend", &store.url(), "search", "-n", "3"])
        .assert()
        .success();

    assert_eq!(
        store.request_lines().await,
        vec!["GET /analyses/?limit=25", "GET /analyses/?limit=3"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_server_error_exit_code_3() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        list: None,
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "search"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("status 500"));
}

#[test]
fn test_search_unreachable_store_exit_code_3() {
    let dir = tempdir().unwrap();

    kex(&dir)
        .args(["--backend", UNREACHABLE, "search"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_backend_from_env() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .env("KEX_BACKEND_URL", store.url())
        .arg("search")
        .assert()
        .success();

    assert_eq!(store.request_lines().await.len(), 1);
}
