//! Integration tests for the `analyze` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::fixtures_dir;

#[test]
fn analyze_plain_text_report() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("analyze")
        .arg(fixtures_dir().join("sample.txt"))
        .arg("--threshold")
        .arg("98")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed 10 events"))
        .stdout(predicate::str::contains("Energy readings: present"))
        .stdout(predicate::str::contains(
            "Sessions (full-charge threshold 98%): 2",
        ));
}

#[test]
fn analyze_html_report() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("analyze")
        .arg(fixtures_dir().join("sample.html"))
        .arg("--threshold")
        .arg("98")
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed 6 events"))
        .stdout(predicate::str::contains(
            "Sessions (full-charge threshold 98%): 1",
        ));
}

#[test]
fn analyze_reports_line_diagnostics_as_warnings() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("analyze")
        .arg(fixtures_dir().join("malformed.txt"))
        .arg("--threshold")
        .arg("98")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid timestamp: whenever"));
}

#[test]
fn analyze_missing_file_fails_with_path_in_message() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("analyze")
        .arg("/nonexistent/battery-report.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("battery-report.html"));
}
