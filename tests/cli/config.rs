use crate::support::kex;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_defaults_without_file() {
    let dir = tempdir().unwrap();

    kex(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("backend_url from: default"))
        .stdout(predicate::str::contains("backend_url = \"http://127.0.0.1:8000\""))
        .stdout(predicate::str::contains("timeout_seconds = 30"));
}

#[test]
fn test_config_file_values() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "backend_url = \"http://store.local:9000\"\ntimeout_seconds = 999\n",
    )
    .unwrap();

    let output = kex(&dir)
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["file_loaded"], true);
    assert_eq!(json["backend_source"], "file");
    assert_eq!(json["config"]["backend_url"], "http://store.local:9000");
    assert_eq!(json["config"]["timeout_seconds"], 300);
}

#[test]
fn test_config_env_overrides_file_and_flag_overrides_env() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "backend_url = \"http://store.local:9000\"\n",
    )
    .unwrap();

    kex(&dir)
        .env("BACKEND_URL", "http://from-env:1234")
        .args(["--format", "records", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C backend_url http://from-env:1234 from=env"));

    kex(&dir)
        .env("KEX_BACKEND_URL", "http://from-env:1234")
        .args(["--format", "records", "--backend", "http://flag:1", "--timeout", "5", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("C backend_url http://flag:1 from=flag"))
        .stdout(predicate::str::contains("C timeout_seconds 5 from=flag"));
}
