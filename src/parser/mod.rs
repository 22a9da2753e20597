//! Tolerant battery report parsing.
//!
//! Turns heterogeneous, loosely-structured report text (the plain-text or
//! HTML output of `powercfg /batteryreport`) into a validated, time-ordered
//! [`ParsedBatteryData`]. Parsing never fails: unparseable lines and rows
//! are skipped or recorded as diagnostics, and the best achievable result
//! is always returned.
//!
//! # Module Structure
//!
//! - [`patterns`] - shared regular expressions
//! - `date` - timestamp matching and date inference
//! - `text` - plain-text line parsing
//! - `html` - HTML table extraction with markup-strip fallback

mod date;
mod html;
pub mod patterns;
mod text;

use crate::report::{
    BatteryEvent, ParsedBatteryData, ReportMetadata, TimeRange, TIMESTAMP_FORMAT,
};

/// Parse a battery report from text, detecting the format.
///
/// Input containing an HTML document marker (`<html` or `<!doctype`,
/// case-insensitive) takes the table-extraction path; if that yields no
/// events, markup is stripped and the residual text is retried as a
/// plain-text report.
pub fn parse(content: &str) -> ParsedBatteryData {
    let lowered = content.to_lowercase();
    if lowered.contains("<html") || lowered.contains("<!doctype") {
        let data = html::parse_html(content);
        if !data.events.is_empty() {
            return data;
        }
        tracing::debug!("table extraction found no events, retrying as stripped text");
        return text::parse_text(&html::strip_markup(content));
    }
    text::parse_text(content)
}

/// Parse a battery report from raw bytes, decoding BOMs first.
pub fn parse_bytes(bytes: &[u8]) -> ParsedBatteryData {
    parse(&crate::report::decode_bytes(bytes))
}

/// Shared finalization for both parse paths.
///
/// Offsets are recomputed from the first event in parse order, and only
/// then is the sequence sorted. A date correction on an earlier line can
/// reorder events afterwards; offsets deliberately keep their parse-order
/// values. The recompute-then-sort sequence is a compatibility contract.
fn finalize(mut events: Vec<BatteryEvent>, errors: Vec<String>) -> ParsedBatteryData {
    let start_date = events.first().map(|event| event.timestamp);

    if let Some(first) = events.first().map(|event| event.timestamp) {
        for event in events.iter_mut() {
            let seconds = (event.timestamp - first).num_seconds();
            event.minutes_offset = (seconds as f64 / 60.0).round() as i64;
        }
        // Stable, so equal timestamps keep parse order
        events.sort_by_key(|event| event.timestamp);
    }

    let metadata = ReportMetadata {
        total_events: events.len(),
        has_energy_data: events.iter().any(|event| event.energy_mwh.is_some()),
        time_range: TimeRange {
            start: events
                .first()
                .map(|event| event.timestamp.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
            end: events
                .last()
                .map(|event| event.timestamp.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        },
    };

    ParsedBatteryData {
        events,
        start_date,
        errors,
        metadata,
    }
}
