//! CSV rendering of events and sessions.

use anyhow::{Context, Result};

use crate::report::{ParsedBatteryData, TIMESTAMP_FORMAT};
use crate::sessions::SessionAnalysis;

/// Render the event timeline as CSV, one row per event.
pub fn events_to_csv(data: &ParsedBatteryData) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "timestamp",
        "minutes_offset",
        "state",
        "percent",
        "energy_mwh",
        "raw_state",
    ])?;

    for event in &data.events {
        writer.write_record([
            event.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            event.minutes_offset.to_string(),
            event.state.to_string(),
            event.percent.to_string(),
            event
                .energy_mwh
                .map(|mwh| mwh.to_string())
                .unwrap_or_default(),
            event.raw_state.clone(),
        ])?;
    }

    finish(writer)
}

/// Render per-session metrics as CSV, one row per session.
pub fn sessions_to_csv(analysis: &SessionAnalysis) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "session_id",
        "start_time",
        "end_time",
        "duration_min",
        "start_pct",
        "end_pct",
        "used_pct",
        "used_mwh",
        "active_minutes",
        "idle_minutes",
        "charging_minutes",
        "active_rate_pct_per_hr",
        "idle_rate_pct_per_hr",
        "is_complete",
    ])?;

    for session in &analysis.sessions {
        writer.write_record([
            session.session_id.to_string(),
            session.start_time.format(TIMESTAMP_FORMAT).to_string(),
            session.end_time.format(TIMESTAMP_FORMAT).to_string(),
            format!("{:.1}", session.duration_min),
            session.start_pct.to_string(),
            session.end_pct.to_string(),
            session.used_pct.to_string(),
            session
                .used_mwh
                .map(|mwh| mwh.to_string())
                .unwrap_or_default(),
            format!("{:.1}", session.active_minutes),
            format!("{:.1}", session.idle_minutes),
            format!("{:.1}", session.charging_minutes),
            format!("{:.2}", session.active_rate_pct_per_hr),
            format!("{:.2}", session.idle_rate_pct_per_hr),
            session.is_complete.to_string(),
        ])?;
    }

    finish(writer)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .context("failed to flush csv output")?;
    String::from_utf8(bytes).context("csv output was not valid utf-8")
}
