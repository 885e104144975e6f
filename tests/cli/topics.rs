use crate::support::{kex, Canned, StubStore, UNREACHABLE};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

// ============================================================================
// Topics command tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_topics_lists_catalog() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "topics"])
        .assert()
        .success()
        .stdout("ai\nnlp\nfinance\n");

    assert_eq!(store.request_lines().await, vec!["GET /topics/"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_topics_match_is_case_insensitive_substring() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        topics: Some(json!(["Machine Learning", "NLP", "Finance"])),
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "topics", "--match", "N"])
        .assert()
        .success()
        .stdout("Machine Learning\nNLP\nFinance\n");

    kex(&dir)
        .args(["--backend", &store.url(), "topics", "--match", "learn"])
        .assert()
        .success()
        .stdout("Machine Learning\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_topics_exclude_hides_selected() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "topics", "--exclude", "nlp"])
        .assert()
        .success()
        .stdout("ai\nfinance\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_topics_no_match_message() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "topics", "--match", "zz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics found matching \"zz\""));
}

#[test]
fn test_topics_fail_open_when_unreachable() {
    let dir = tempdir().unwrap();

    kex(&dir)
        .args(["--backend", UNREACHABLE, "topics"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No topics available"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_topics_fail_open_on_server_error() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        topics: None,
        ..Canned::default()
    })
    .await;

    let output = kex(&dir)
        .args(["--backend", &store.url(), "--format", "json", "topics"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["catalog_size"], 0);
    assert_eq!(json["topics"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_topics_records_output() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "--format", "records", "topics", "--match", "a"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "H kex=1 records=1 mode=topics match=\"a\" catalog=3 candidates=2",
        ))
        .stdout(predicate::str::contains("T ai\n"))
        .stdout(predicate::str::contains("T finance\n"));
}
