//! Subcommand handlers for the batrep binary.

pub mod analyze;
pub mod config;
pub mod export;
pub mod sessions;
pub mod validate;

use batrep::BatterySession;

/// Shared loading step: read, decode, and parse a report file.
pub(crate) fn load_and_parse(path: &std::path::Path) -> anyhow::Result<batrep::ParsedBatteryData> {
    use anyhow::Context;
    let content = batrep::report::load_report(path)
        .with_context(|| format!("could not load report {}", path.display()))?;
    Ok(batrep::parser::parse(&content))
}

/// Resolve the full-charge threshold: CLI flag first, then config.
pub(crate) fn resolve_threshold(flag: Option<i32>) -> anyhow::Result<i32> {
    if let Some(threshold) = flag {
        return Ok(threshold);
    }
    Ok(batrep::Config::load()?.analysis.full_charge_threshold)
}

/// `123.0` minutes as `2h 3m`.
pub(crate) fn format_minutes(minutes: f64) -> String {
    let total = minutes.round() as i64;
    let (hours, mins) = (total / 60, total % 60);
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

/// One session as a fixed-width table row.
pub(crate) fn session_row(session: &BatterySession) -> String {
    format!(
        "{:>3}  {}  {:>7}  {:>4} -> {:<4} {:>6}  {:>8}  {:>8}  {}",
        session.session_id,
        session.start_time.format("%Y-%m-%d %H:%M"),
        format_minutes(session.duration_min),
        format!("{}%", session.start_pct),
        format!("{}%", session.end_pct),
        format!("-{}%", session.used_pct),
        format!("{:.2}/h", session.active_rate_pct_per_hr),
        format!("{:.2}/h", session.idle_rate_pct_per_hr),
        if session.is_complete { "complete" } else { "partial" },
    )
}

pub(crate) const SESSION_HEADER: &str =
    " id  start             length   charge        used   active     idle     status";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_minutes_renders_hours_and_minutes() {
        assert_eq!(format_minutes(0.0), "0m");
        assert_eq!(format_minutes(59.4), "59m");
        assert_eq!(format_minutes(60.0), "1h 0m");
        assert_eq!(format_minutes(205.0), "3h 25m");
    }
}
