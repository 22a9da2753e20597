//! Integration tests for the `validate` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::fixtures_dir;

#[test]
fn valid_report_passes_with_ok_line() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("validate")
        .arg(fixtures_dir().join("sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 10 events"));
}

#[test]
fn sparse_report_fails_with_issues() {
    Command::cargo_bin("batrep")
        .unwrap()
        .arg("validate")
        .arg(fixtures_dir().join("malformed.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("may not be meaningful"))
        .stdout(predicate::str::contains(
            "Invalid battery percentage values detected",
        ));
}
