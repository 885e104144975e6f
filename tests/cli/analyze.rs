use crate::support::{kex, Canned, StubStore};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

// ============================================================================
// Analyze command tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_text_flag() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "analyze", "--text", "Revenue grew."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fresh [new1]"))
        .stdout(predicate::str::contains("Sentiment: Positive"))
        .stdout(predicate::str::contains("Key Topics: ai"))
        .stdout(predicate::str::contains("ID: new1"));

    let seen = store.requests().await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method.to_string(), "POST");
    assert_eq!(seen[0].url.path(), "/analyze");
    let body: serde_json::Value = serde_json::from_slice(&seen[0].body).unwrap();
    assert_eq!(body["text"], "Revenue grew.");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_reads_stdin() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "--format", "records", "analyze"])
        .write_stdin("Piped text\nacross lines\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("H kex=1 records=1 mode=analyze id=new1"))
        .stdout(predicate::str::contains("T ai"));

    let seen = store.requests().await;
    let body: serde_json::Value = serde_json::from_slice(&seen[0].body).unwrap();
    assert_eq!(body["text"], "Piped text\nacross lines\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_blank_text_never_reaches_store() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "analyze", "--text", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Please enter some text to analyze"));

    assert!(store.requests().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_analyze_store_error_exit_code_3() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        analyze: json!({"unexpected": true}),
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "analyze", "--text", "hello"])
        .assert()
        .code(3);
}
