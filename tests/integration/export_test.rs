//! Integration tests for the `export` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{fixtures_dir, temp_fixture};

#[test]
fn export_events_csv_to_stdout() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("export")
        .arg(fixtures_dir().join("sample.txt"))
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "timestamp,minutes_offset,state,percent,energy_mwh,raw_state",
        ))
        .stdout(predicate::str::contains("2025-08-24 07:58:00"));
}

#[test]
fn export_sessions_json_is_parseable() {
    let output = Command::cargo_bin("batrep")
        .unwrap()
        .arg("export")
        .arg(fixtures_dir().join("sample.txt"))
        .args(["--format", "json", "--what", "sessions", "--threshold", "98"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["sessions"].as_array().unwrap().len(), 2);
    assert_eq!(value["full_charge_events"], serde_json::json!([0, 6]));
}

#[test]
fn export_writes_output_file() {
    let (dir, report) = temp_fixture("sample.txt");
    let out_path = dir.path().join("events.csv");

    Command::cargo_bin("batrep")
        .unwrap()
        .arg("export")
        .arg(&report)
        .args(["--format", "csv"])
        .arg("--output")
        .arg(&out_path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out_path).unwrap();
    // Header plus one row per event
    assert_eq!(written.lines().count(), 11);

    drop(dir);
}
