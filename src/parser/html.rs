//! HTML battery report parsing.
//!
//! The HTML report is a table whose rows mirror the plain-text columns.
//! Rows are located with the shared row/cell patterns rather than a full
//! DOM parse; cell meaning is assigned heuristically by keyword and pattern
//! membership. Retained rows go through the same date inference and event
//! construction as plain-text lines.

use super::date::{self, DateContext};
use super::text;
use super::{finalize, patterns};
use crate::report::{BatteryEvent, BatteryState, ParsedBatteryData};

/// Cell keywords that mark a state column.
const STATE_KEYWORDS: &[&str] = &[
    "active",
    "standby",
    "suspended",
    "charging",
    "connected",
    "report generated",
];

/// Cell keywords that mark the power source column. Recognized so the cell
/// is consumed by classification; the event model has no source field.
const SOURCE_KEYWORDS: &[&str] = &["battery", "ac"];

/// One table row that passed structural checks, before event construction.
struct RawRow {
    /// 1-based position among all `<tr>` blocks, for diagnostics.
    number: usize,
    timestamp: String,
    raw_state: String,
    percent: i32,
    energy_mwh: Option<i64>,
}

/// Parse an HTML report. Yields an empty result (not an error) when no
/// usable rows exist; the caller decides whether to fall back.
pub(crate) fn parse_html(content: &str) -> ParsedBatteryData {
    let rows = extract_rows(content);

    let previous_day =
        date::scan_previous_day(rows.iter().map(|row| row.timestamp.as_str()));
    let mut ctx = DateContext::new(previous_day);

    let mut events = Vec::new();
    let mut errors = Vec::new();

    for row in &rows {
        match text::resolve_timestamp(&row.timestamp, &mut ctx) {
            Some(timestamp) => events.push(BatteryEvent {
                timestamp,
                minutes_offset: 0,
                state: BatteryState::normalize(&row.raw_state),
                percent: row.percent,
                energy_mwh: row.energy_mwh,
                raw_state: row.raw_state.clone(),
            }),
            None => errors.push(format!(
                "Row {}: Invalid timestamp: {}",
                row.number, row.timestamp
            )),
        }
    }

    tracing::debug!(
        rows = rows.len(),
        events = events.len(),
        "parsed html report table"
    );

    finalize(events, errors)
}

/// Extract usable table rows: no `<th` cells, at least 10 characters of
/// content, at least 3 cells, first cell a timestamp, some cell a percent.
fn extract_rows(content: &str) -> Vec<RawRow> {
    let mut rows = Vec::new();

    for (idx, caps) in patterns::table_row().captures_iter(content).enumerate() {
        let body = &caps[1];
        if body.to_lowercase().contains("<th") {
            continue;
        }
        if clean_cell(body).len() < 10 {
            continue;
        }

        let cells: Vec<String> = patterns::table_cell()
            .captures_iter(body)
            .map(|cell| clean_cell(&cell[1]))
            .collect();
        if cells.len() < 3 {
            continue;
        }

        // The first cell must be the timestamp column
        if date::match_timestamp(&cells[0]).is_none() {
            continue;
        }

        let mut raw_state = String::new();
        let mut percent = None;
        let mut energy_mwh = None;
        for cell in &cells[1..] {
            let lower = cell.to_lowercase();
            if STATE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
                raw_state = cell.clone();
                continue;
            }
            if SOURCE_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
                continue;
            }
            // Last match wins per category
            if let Some(value) = text::extract_percent(cell) {
                percent = Some(value);
            }
            if let Some(value) = text::extract_energy(cell) {
                energy_mwh = Some(value);
            }
        }

        let Some(percent) = percent else { continue };
        rows.push(RawRow {
            number: idx + 1,
            timestamp: cells[0].clone(),
            raw_state,
            percent,
            energy_mwh,
        });
    }

    rows
}

/// Strip tags, decode `&nbsp;`, and collapse whitespace in a cell body.
fn clean_cell(body: &str) -> String {
    let stripped = patterns::tag().replace_all(body, " ");
    let decoded = stripped.replace("&nbsp;", " ");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce a whole HTML document to delimiter-structured text so the
/// plain-text path can retry it: row ends become line breaks, remaining tags
/// become column separators.
pub(crate) fn strip_markup(content: &str) -> String {
    let with_breaks = regex::Regex::new(r"(?i)</tr>")
        .expect("pattern is valid")
        .replace_all(content, "\n");
    let text = patterns::tag().replace_all(&with_breaks, "\t");
    text.replace("&nbsp;", " ")
}
