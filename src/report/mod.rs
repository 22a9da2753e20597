//! Core data model for parsed battery reports.
//!
//! A battery report is a timeline of [`BatteryEvent`] samples taken by
//! Windows (`powercfg /batteryreport`). Parsing produces a
//! [`ParsedBatteryData`] holding the time-ordered events, per-line
//! diagnostics, and derived metadata. Downstream consumers (session
//! segmentation, export, CLI output) treat the parse result as read-only.

mod load;
mod validate;

pub use load::{decode_bytes, load_report, ReportError};
pub use validate::{validate, ValidationReport};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used for display and metadata strings.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Normalized power state of a battery sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BatteryState {
    Active,
    Idle,
    Charging,
    Unknown,
}

impl BatteryState {
    /// Normalize a free-text state label from the report.
    ///
    /// Case-insensitive substring match, first match wins:
    /// "active" -> Active; "standby"/"suspended"/"sleep" -> Idle;
    /// "charging"/"plugged"/"ac" -> Charging; anything else -> Unknown.
    pub fn normalize(raw: &str) -> Self {
        let lower = raw.to_lowercase();
        if lower.contains("active") {
            BatteryState::Active
        } else if ["standby", "suspended", "sleep"]
            .iter()
            .any(|kw| lower.contains(kw))
        {
            BatteryState::Idle
        } else if ["charging", "plugged", "ac"]
            .iter()
            .any(|kw| lower.contains(kw))
        {
            BatteryState::Charging
        } else {
            BatteryState::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BatteryState::Active => "Active",
            BatteryState::Idle => "Idle",
            BatteryState::Charging => "Charging",
            BatteryState::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for BatteryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One timeline sample from the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryEvent {
    /// Absolute instant of the sample. The source data carries no timezone,
    /// so naive local time is the correct representation.
    pub timestamp: NaiveDateTime,
    /// Rounded minutes since the first event, computed in parse order before
    /// the final sort.
    pub minutes_offset: i64,
    /// Normalized power state.
    pub state: BatteryState,
    /// Battery charge percentage. Out-of-range values pass through parsing
    /// unmodified; validation flags them.
    pub percent: i32,
    /// Instantaneous energy reading, when the source line carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_mwh: Option<i64>,
    /// Original unnormalized state label, kept for diagnostics and export.
    pub raw_state: String,
}

/// Start/end of the parsed timeline as display strings (empty when no events).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: String,
    pub end: String,
}

/// Derived summary of a parse result. Never mutated independently of `events`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub total_events: usize,
    pub has_energy_data: bool,
    pub time_range: TimeRange,
}

/// Result of parsing a battery report.
///
/// Invariant: `events` is sorted non-decreasing by timestamp, and the first
/// event in parse order has `minutes_offset == 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedBatteryData {
    pub events: Vec<BatteryEvent>,
    /// Timestamp of the first successfully parsed event, in parse order.
    pub start_date: Option<NaiveDateTime>,
    /// Non-fatal per-line/per-row diagnostics. A populated list does not
    /// imply overall failure.
    pub errors: Vec<String>,
    pub metadata: ReportMetadata,
}

impl ParsedBatteryData {
    /// Result for input that produced nothing at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_maps_active_labels() {
        assert_eq!(BatteryState::normalize("Active"), BatteryState::Active);
        assert_eq!(BatteryState::normalize("ACTIVE"), BatteryState::Active);
    }

    #[test]
    fn normalize_maps_idle_labels() {
        assert_eq!(
            BatteryState::normalize("Connected standby"),
            BatteryState::Idle
        );
        assert_eq!(BatteryState::normalize("Suspended"), BatteryState::Idle);
        assert_eq!(BatteryState::normalize("Sleep"), BatteryState::Idle);
    }

    #[test]
    fn normalize_maps_charging_labels() {
        assert_eq!(
            BatteryState::normalize("Charging"),
            BatteryState::Charging
        );
        assert_eq!(
            BatteryState::normalize("Plugged in"),
            BatteryState::Charging
        );
        assert_eq!(BatteryState::normalize("AC"), BatteryState::Charging);
    }

    #[test]
    fn normalize_active_wins_over_ac_substring() {
        // "active" contains "ac"; the active check runs first
        assert_eq!(
            BatteryState::normalize("Interactive"),
            BatteryState::Active
        );
    }

    #[test]
    fn normalize_falls_back_to_unknown() {
        assert_eq!(BatteryState::normalize("???"), BatteryState::Unknown);
        assert_eq!(BatteryState::normalize(""), BatteryState::Unknown);
    }

    #[test]
    fn empty_data_has_default_metadata() {
        let data = ParsedBatteryData::empty();
        assert!(data.events.is_empty());
        assert!(data.errors.is_empty());
        assert_eq!(data.metadata.total_events, 0);
        assert!(!data.metadata.has_energy_data);
        assert_eq!(data.metadata.time_range.start, "");
        assert_eq!(data.metadata.time_range.end, "");
    }
}
