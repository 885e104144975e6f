use crate::support::{kex, UNREACHABLE};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Compose command tests (no network)
// ============================================================================

#[test]
fn test_compose_without_filters() {
    let dir = tempdir().unwrap();
    kex(&dir)
        .arg("compose")
        .assert()
        .success()
        .stdout(predicate::str::contains("No filters"));
}

#[test]
fn test_compose_human_pairs_in_canonical_order() {
    let dir = tempdir().unwrap();
    kex(&dir)
        .args(["compose", "-n", "10", "-t", "ai", "-s", "POSITIVE", "-k", "  growth  "])
        .assert()
        .success()
        .stdout("keyword = growth\nsentiment = positive\ntopics = ai\nlimit = 10\n");
}

#[test]
fn test_compose_blank_keyword_is_dropped() {
    let dir = tempdir().unwrap();
    kex(&dir)
        .args(["--format", "records", "compose", "-k", "   ", "--topics", "ai, ,nlp"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pairs=1"))
        .stdout(predicate::str::contains("Q topics=ai%2Cnlp"));
}

#[test]
fn test_compose_json() {
    let dir = tempdir().unwrap();
    let output = kex(&dir)
        .args(["--format", "json", "compose", "-k", "a&b", "-s", "neutral"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["query"]["keyword"], "a&b");
    assert_eq!(json["encoded"], "keyword=a%26b&sentiment=neutral");
}

#[test]
fn test_compose_never_touches_the_store() {
    let dir = tempdir().unwrap();
    kex(&dir)
        .args(["--backend", UNREACHABLE, "compose", "-k", "x"])
        .assert()
        .success();
}
