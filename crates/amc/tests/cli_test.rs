//! Integration tests for the `amc` binary.
//!
//! These cover argument parsing, offline generation and status from a
//! snapshot file, and the config subcommands. No live services needed.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `amc` binary with env isolation.
///
/// Clears `AMC_*` variables and points config directories at a
/// nonexistent path so tests never touch a real configuration.
fn amc_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("amc");
    cmd.env("HOME", "/tmp/amc-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/amc-cli-test-nonexistent")
        .env_remove("AMC_CONFIG")
        .env_remove("AMC_CONTROLLER__INACTIVITY_TIMEOUT_SECS")
        .env_remove("RUST_LOG");
    cmd
}

const NOW: &str = "1700000000";

fn write_snapshot(dir: &Path) -> std::path::PathBuf {
    let snapshot = json!({
        "activeModeConfigs": [
            {
                "desiredState": "registered",
                "cbsd": {
                    "id": "some_cbsd_id",
                    "serialNumber": "sn-grant",
                    "state": "registered",
                    "lastSeenTimestamp": 1_700_000_000_i64,
                    "channels": [{
                        "frequencyRange": { "low": 3.62e9, "high": 3.63e9 },
                        "maxEirp": 15.0
                    }],
                    "eirpCapabilities": {
                        "minPower": 0.0,
                        "maxPower": 100.0,
                        "antennaGain": 0.0,
                        "numberOfPorts": 1
                    }
                }
            },
            {
                "desiredState": "unregistered",
                "cbsd": {
                    "id": "pending_cbsd",
                    "serialNumber": "sn-pending",
                    "state": "registered",
                    "lastSeenTimestamp": 1_700_000_000_i64,
                    "pendingRequests": ["{\"cbsdId\":\"pending_cbsd\"}"]
                }
            },
            {
                "desiredState": "registered",
                "cbsd": {
                    "serialNumber": "sn-deleted",
                    "state": "unregistered",
                    "isDeleted": true
                }
            }
        ]
    });
    let path = dir.join("state.json");
    std::fs::write(&path, snapshot.to_string()).unwrap();
    path
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = amc_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(text.contains("Usage"), "Expected 'Usage' in:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    amc_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("generate")
            .and(predicate::str::contains("status"))
            .and(predicate::str::contains("once")),
    );
}

#[test]
fn test_completions_bash() {
    amc_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Offline generation ──────────────────────────────────────────────

#[test]
fn test_generate_json() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_snapshot(dir.path());

    let output = amc_cmd()
        .args(["generate", "--now", NOW, "-o", "json", "--state"])
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success());

    let planned: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(planned.len(), 3);

    let grant = &planned[0]["action"];
    assert_eq!(grant["kind"], "grantRequest");
    assert_eq!(grant["data"]["operationParam"]["maxEirp"], json!(15));
    assert_eq!(
        grant["data"]["operationParam"]["operationFrequencyRange"],
        json!({ "lowFrequency": 3_620_000_000_i64, "highFrequency": 3_630_000_000_i64 })
    );

    assert_eq!(planned[1]["action"]["kind"], "deregistrationRequest");
    assert_eq!(planned[2]["action"]["serial_number"], "sn-deleted");
}

#[test]
fn test_generate_pending_filter() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_snapshot(dir.path());

    let output = amc_cmd()
        .args(["generate", "--pending", "--now", NOW, "-o", "json", "--state"])
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success());

    let planned: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    let serials: Vec<&str> = planned
        .iter()
        .map(|p| p["serial_number"].as_str().unwrap())
        .collect();
    assert_eq!(serials, vec!["sn-grant", "sn-deleted"]);
}

#[test]
fn test_generate_plain_prints_payloads() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_snapshot(dir.path());

    amc_cmd()
        .args(["generate", "--now", NOW, "-o", "plain", "--state"])
        .arg(&state)
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#"{"deregistrationRequest":[{"cbsdId":"pending_cbsd"}]}"#)
                .and(predicate::str::contains("deleteCbsd sn-deleted")),
        );
}

#[test]
fn test_generate_missing_file() {
    amc_cmd()
        .args(["generate", "--state", "/nonexistent/state.json"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read"));
}

#[test]
fn test_generate_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{ not json").unwrap();

    amc_cmd()
        .args(["generate", "--state"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid state snapshot"));
}

// ── Status ──────────────────────────────────────────────────────────

#[test]
fn test_status_plain_lists_serials() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_snapshot(dir.path());

    amc_cmd()
        .args(["status", "--now", NOW, "-o", "plain", "--state"])
        .arg(&state)
        .assert()
        .success()
        .stdout("sn-grant\nsn-pending\nsn-deleted\n");
}

#[test]
fn test_status_json_reports_liveness() {
    let dir = tempfile::tempdir().unwrap();
    let state = write_snapshot(dir.path());

    let output = amc_cmd()
        .args(["status", "--now", NOW, "-o", "json", "--state"])
        .arg(&state)
        .output()
        .unwrap();
    let rows: Vec<Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["is_active"], true);
    assert_eq!(rows[0]["rule"], "request_grant");
    assert_eq!(rows[2]["is_active"], false);
    assert_eq!(rows[2]["planned"], json!(["deleteCbsd"]));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amc.toml");

    amc_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    amc_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("polling_interval_secs = 10"));

    amc_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_path_honours_flag() {
    amc_cmd()
        .args(["--config", "/etc/amc/custom.toml", "config", "path"])
        .assert()
        .success()
        .stdout("/etc/amc/custom.toml\n");
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("amc.toml");
    std::fs::write(&path, "[controller]\nsend_timeout_secs = 0\n").unwrap();

    amc_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("controller.send_timeout_secs"));
}
