//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the fixture battery reports.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a fresh temp dir; returns the dir (keep it alive)
/// and the copied file's path.
#[allow(dead_code)]
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let dest = dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &dest).expect("copy fixture");
    (dir, dest)
}
