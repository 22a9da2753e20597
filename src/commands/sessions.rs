//! `sessions` subcommand handler.

use std::path::Path;

use anyhow::Result;

use batrep::export::analysis_to_json;
use batrep::sessions::detect_sessions;

use super::{load_and_parse, resolve_threshold, session_row, SESSION_HEADER};

/// Print per-session metrics, as a table or as JSON.
pub fn run(file: &Path, threshold: Option<i32>, json: bool) -> Result<()> {
    let threshold = resolve_threshold(threshold)?;
    let data = load_and_parse(file)?;
    let analysis = detect_sessions(&data, threshold);

    if json {
        println!("{}", analysis_to_json(&analysis)?);
        return Ok(());
    }

    if analysis.sessions.is_empty() {
        println!("No discharge sessions found (threshold {threshold}%)");
        return Ok(());
    }

    println!("{SESSION_HEADER}");
    for session in &analysis.sessions {
        println!("{}", session_row(session));
    }
    Ok(())
}
