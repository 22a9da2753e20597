//! `analyze` subcommand handler.

use std::path::Path;

use anyhow::Result;

use batrep::report::validate;
use batrep::sessions::detect_sessions;

use super::{load_and_parse, resolve_threshold, session_row, SESSION_HEADER};

/// Parse, validate, and segment a report, then print an overview.
pub fn run(file: &Path, threshold: Option<i32>) -> Result<()> {
    let threshold = resolve_threshold(threshold)?;
    let data = load_and_parse(file)?;
    let validation = validate(&data);
    let analysis = detect_sessions(&data, threshold);

    println!("Report: {}", file.display());
    println!(
        "Parsed {} events ({} parse warnings)",
        data.metadata.total_events,
        data.errors.len()
    );
    if !data.metadata.time_range.start.is_empty() {
        println!(
            "Range:  {} .. {}",
            data.metadata.time_range.start, data.metadata.time_range.end
        );
    }
    println!(
        "Energy readings: {}",
        if data.metadata.has_energy_data {
            "present"
        } else {
            "absent"
        }
    );

    for error in &data.errors {
        println!("  warning: {error}");
    }
    for issue in &validation.issues {
        println!("  issue: {issue}");
    }

    println!();
    println!(
        "Sessions (full-charge threshold {}%): {}",
        threshold,
        analysis.sessions.len()
    );
    if !analysis.sessions.is_empty() {
        println!("{SESSION_HEADER}");
        for session in &analysis.sessions {
            println!("{}", session_row(session));
        }
    }

    let summary = &analysis.summary;
    if summary.total_sessions > 0 {
        println!();
        println!(
            "Averages over {} complete sessions: screen-on {}, active drain {:.2}%/h, idle drain {:.2}%/h",
            summary.total_sessions,
            super::format_minutes(summary.avg_screen_on_time as f64),
            summary.avg_active_drain,
            summary.avg_idle_drain,
        );
    }

    Ok(())
}
