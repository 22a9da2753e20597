//! JSON rendering of events and analysis results.

use anyhow::{Context, Result};

use crate::report::ParsedBatteryData;
use crate::sessions::SessionAnalysis;

/// Render the full parse result (events, diagnostics, metadata) as JSON.
pub fn events_to_json(data: &ParsedBatteryData) -> Result<String> {
    serde_json::to_string_pretty(data).context("failed to serialize parsed data")
}

/// Render a segmentation result as JSON.
pub fn analysis_to_json(analysis: &SessionAnalysis) -> Result<String> {
    serde_json::to_string_pretty(analysis).context("failed to serialize session analysis")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;
    use crate::sessions::{detect_sessions, DEFAULT_FULL_CHARGE_THRESHOLD};

    const REPORT: &str = "2025-08-25 08:00:00\tActive\tBattery\t100 %\t50,000 mWh\n\
                          2025-08-25 09:00:00\tConnected standby\tBattery\t90 %\t45,000 mWh";

    #[test]
    fn parsed_data_round_trips_through_json() {
        let data = parser::parse(REPORT);
        let json = events_to_json(&data).unwrap();
        let back: ParsedBatteryData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn analysis_json_carries_settings_and_summary() {
        let data = parser::parse(REPORT);
        let analysis = detect_sessions(&data, DEFAULT_FULL_CHARGE_THRESHOLD);
        let json = analysis_to_json(&analysis).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["settings"]["full_charge_threshold"], 98);
        assert_eq!(value["sessions"][0]["used_pct"], 10);
        assert_eq!(value["summary"]["total_sessions"], 1);
    }

    #[test]
    fn absent_energy_fields_are_omitted() {
        let data = parser::parse("2025-08-25 08:00:00\tActive\tBattery\t100 %");
        let json = events_to_json(&data).unwrap();
        assert!(!json.contains("energy_mwh"));
    }
}
