//! Plain-text battery report parsing.
//!
//! Lines are tab- or multi-space-delimited columns: a timestamp, a state
//! label, and somewhere on the line a `NN %` charge and optionally a
//! `N,NNN mWh` energy figure. Real reports interleave these rows with
//! headers and free text, so everything that does not look like a sample is
//! skipped silently; only rows that look right but fail to resolve are
//! reported as diagnostics.

use chrono::NaiveDateTime;

use super::date::{self, DateContext};
use super::{finalize, patterns};
use crate::report::{BatteryEvent, BatteryState, ParsedBatteryData};

/// Outcome of processing a single line.
enum LineOutcome {
    Event(BatteryEvent),
    /// Structural noise, not reported.
    Skip,
    /// Shaped like a sample but unresolvable; recorded as a diagnostic.
    Error(String),
}

/// Parse a plain-text report. Never fails; see module docs for the skip
/// versus diagnostic distinction.
pub(crate) fn parse_text(content: &str) -> ParsedBatteryData {
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let previous_day = date::scan_previous_day(lines.iter().copied());
    let mut ctx = DateContext::new(previous_day);

    let mut events = Vec::new();
    let mut errors = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        match parse_line(line, &mut ctx) {
            LineOutcome::Event(event) => events.push(event),
            LineOutcome::Skip => {}
            LineOutcome::Error(message) => {
                errors.push(format!("Line {}: {}", idx + 1, message));
            }
        }
    }

    tracing::debug!(
        events = events.len(),
        errors = errors.len(),
        "parsed plain-text report"
    );

    finalize(events, errors)
}

fn parse_line(line: &str, ctx: &mut DateContext) -> LineOutcome {
    // Headers and noise: markup, the report banner, short separator lines
    if line.contains('<') || line.contains("Report generated") || line.len() < 10 {
        return LineOutcome::Skip;
    }

    let tokens: Vec<&str> = patterns::delimiter()
        .split(line)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.len() < 3 {
        return LineOutcome::Skip;
    }

    // Resolve the timestamp first: an explicit date must be remembered for
    // later time-only lines even when this line yields no record
    let timestamp = resolve_timestamp(tokens[0], ctx);

    // No percentage means no usable record, even with a valid timestamp
    let percent = match extract_percent(line) {
        Some(p) => p,
        None => return LineOutcome::Skip,
    };

    let timestamp = match timestamp {
        Some(ts) => ts,
        None => return LineOutcome::Error(format!("Invalid timestamp: {}", tokens[0])),
    };

    let raw_state = tokens[1].to_string();
    LineOutcome::Event(BatteryEvent {
        timestamp,
        minutes_offset: 0,
        state: BatteryState::normalize(&raw_state),
        percent,
        energy_mwh: extract_energy(line),
        raw_state,
    })
}

/// Combine the matched time with the inferred date. `None` when the token
/// carries no recognizable or possible time. An explicit date is remembered
/// in the context even when the time turns out invalid.
pub(crate) fn resolve_timestamp(token: &str, ctx: &mut DateContext) -> Option<NaiveDateTime> {
    let matched = date::match_timestamp(token)?;
    let date = ctx.resolve(matched.date);
    Some(NaiveDateTime::new(date, matched.time?))
}

pub(crate) fn extract_percent(text: &str) -> Option<i32> {
    patterns::percent()
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

pub(crate) fn extract_energy(text: &str) -> Option<i64> {
    patterns::energy()
        .captures(text)
        .and_then(|caps| caps[1].replace(',', "").parse().ok())
}
