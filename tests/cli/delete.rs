use crate::support::{kex, record_json, Canned, StubStore, UNREACHABLE};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

// ============================================================================
// Delete command tests
// ============================================================================

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_then_refetches_with_filter() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        list: Some(json!([record_json("a1", Some("Kept"), &["ai"], "neutral")])),
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "delete", "b2", "-s", "neutral"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted analysis b2"))
        .stdout(predicate::str::contains("Found 1 analysis matching your criteria"))
        .stdout(predicate::str::contains("Kept [a1]"));

    assert_eq!(
        store.request_lines().await,
        vec!["DELETE /analyses/b2", "GET /analyses/?sentiment=neutral"]
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_encodes_id_in_path() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    kex(&dir)
        .args(["--backend", &store.url(), "delete", "a b/c"])
        .assert()
        .success();

    assert_eq!(store.request_lines().await[0], "DELETE /analyses/a%20b%2Fc");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_json_reports_deleted_id() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned::default()).await;

    let output = kex(&dir)
        .args(["--backend", &store.url(), "--format", "json", "delete", "b2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["deleted"], "b2");
    assert_eq!(json["count"], 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_failure_skips_refresh() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        delete_status: 404,
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "delete", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to delete analysis"));

    assert_eq!(store.request_lines().await, vec!["DELETE /analyses/missing"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_succeeds_but_refresh_fails() {
    let dir = tempdir().unwrap();
    let store = StubStore::start(Canned {
        list: None,
        ..Canned::default()
    })
    .await;

    kex(&dir)
        .args(["--backend", &store.url(), "delete", "b2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Deleted analysis b2, but refreshing the list failed",
        ));

    let output = kex(&dir)
        .args(["--backend", &store.url(), "--format", "json", "delete", "b2"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "refresh_failed");

    assert_eq!(
        store.request_lines().await,
        vec![
            "DELETE /analyses/b2",
            "GET /analyses/",
            "DELETE /analyses/b2",
            "GET /analyses/",
        ]
    );
}

#[test]
fn test_delete_unreachable_store_json_error() {
    let dir = tempdir().unwrap();
    let output = kex(&dir)
        .args(["--backend", UNREACHABLE, "--format", "json", "delete", "x"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let err: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(err["error"]["type"], "delete_failed");
}

#[test]
fn test_delete_blank_id_is_usage_error() {
    let dir = tempdir().unwrap();
    kex(&dir)
        .args(["--backend", UNREACHABLE, "delete", "  "])
        .assert()
        .code(2);
}
