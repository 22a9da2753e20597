//! Advisory data-quality checks on a parse result.
//!
//! Validation never alters the data and never blocks parsing; callers decide
//! whether to surface issues as warnings or stop on them.

use serde::Serialize;

use super::ParsedBatteryData;

/// Outcome of [`validate`]. `is_valid` is true iff `issues` is empty.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// Check a parse result for data-quality problems.
///
/// Flags (non-exclusive): zero events, fewer than five events, battery
/// percentages outside 0-100, and timestamps out of chronological order.
pub fn validate(data: &ParsedBatteryData) -> ValidationReport {
    let mut issues = Vec::new();

    if data.events.is_empty() {
        issues.push("No battery events found in the report".to_string());
    } else if data.events.len() < 5 {
        issues.push(format!(
            "Only {} events parsed; analysis may not be meaningful",
            data.events.len()
        ));
    }

    if data
        .events
        .iter()
        .any(|e| e.percent < 0 || e.percent > 100)
    {
        issues.push("Invalid battery percentage values detected".to_string());
    }

    if data
        .events
        .windows(2)
        .any(|pair| pair[1].timestamp < pair[0].timestamp)
    {
        issues.push("Timestamps are not in chronological order".to_string());
    }

    ValidationReport {
        is_valid: issues.is_empty(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{BatteryEvent, BatteryState};
    use chrono::NaiveDate;

    fn event(hour: u32, percent: i32) -> BatteryEvent {
        BatteryEvent {
            timestamp: NaiveDate::from_ymd_opt(2025, 8, 25)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            minutes_offset: 0,
            state: BatteryState::Active,
            percent,
            energy_mwh: None,
            raw_state: "Active".to_string(),
        }
    }

    fn data_with(events: Vec<BatteryEvent>) -> ParsedBatteryData {
        ParsedBatteryData {
            events,
            ..ParsedBatteryData::empty()
        }
    }

    #[test]
    fn empty_data_is_invalid() {
        let report = validate(&data_with(vec![]));
        assert!(!report.is_valid);
        assert!(report.issues[0].contains("No battery events"));
    }

    #[test]
    fn few_events_flagged_as_not_meaningful() {
        let report = validate(&data_with(vec![event(8, 100), event(9, 90)]));
        assert!(!report.is_valid);
        assert!(report.issues[0].contains("may not be meaningful"));
    }

    #[test]
    fn out_of_range_percent_is_flagged() {
        let events = (0..5).map(|h| event(h, 50)).chain([event(6, 150)]).collect();
        let report = validate(&data_with(events));
        assert!(report
            .issues
            .contains(&"Invalid battery percentage values detected".to_string()));
    }

    #[test]
    fn non_monotonic_timestamps_are_flagged() {
        let events = vec![event(10, 90), event(8, 80), event(11, 70), event(12, 60), event(13, 50)];
        let report = validate(&data_with(events));
        assert!(report
            .issues
            .iter()
            .any(|i| i.contains("chronological order")));
    }

    #[test]
    fn clean_data_is_valid() {
        let events = (8..14).map(|h| event(h, 100 - h as i32)).collect();
        let report = validate(&data_with(events));
        assert!(report.is_valid);
        assert!(report.issues.is_empty());
    }
}
