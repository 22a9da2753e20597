//! Integration tests for the `sessions` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::fixtures_dir;

#[test]
fn sessions_json_output_is_parseable() {
    let output = Command::cargo_bin("batrep")
        .unwrap()
        .arg("sessions")
        .arg(fixtures_dir().join("sample.txt"))
        .args(["--threshold", "98", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["settings"]["full_charge_threshold"], 98);
    assert_eq!(value["sessions"].as_array().unwrap().len(), 2);
    assert_eq!(value["sessions"][0]["session_id"], 1);
    assert_eq!(value["summary"]["total_sessions"], 2);
}

#[test]
fn sessions_table_lists_complete_sessions() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("sessions")
        .arg(fixtures_dir().join("sample.txt"))
        .args(["--threshold", "98"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn threshold_flag_changes_settings() {
    let output = Command::cargo_bin("batrep")
        .unwrap()
        .arg("sessions")
        .arg(fixtures_dir().join("sample.txt"))
        .args(["--threshold", "90", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["settings"]["full_charge_threshold"], 90);
}
