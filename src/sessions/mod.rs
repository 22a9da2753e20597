//! Discharge session segmentation.
//!
//! Consumes a parsed event timeline, finds full-charge boundaries, carves
//! the timeline into charge-to-charge sessions, and computes per-session
//! drain metrics. Pure and deterministic: re-running with a different
//! threshold never mutates the input.

mod metrics;

pub use metrics::{AnalysisSummary, BatterySession};

use serde::Serialize;

use crate::report::{BatteryState, ParsedBatteryData};

/// Battery percentage treated as a full charge when splitting sessions.
pub const DEFAULT_FULL_CHARGE_THRESHOLD: i32 = 98;

/// Boundary indices closer together than this collapse into one boundary.
/// Reports emit runs of near-full readings while plugged in.
const BOUNDARY_DEDUP_WINDOW: usize = 5;

/// Settings a segmentation run was performed with.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SegmentationSettings {
    pub full_charge_threshold: i32,
}

/// Top-level segmentation result.
///
/// `full_charge_events` holds indices into the exact event sequence the
/// analysis was produced from; they are meaningless against any other
/// sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SessionAnalysis {
    pub sessions: Vec<BatterySession>,
    pub full_charge_events: Vec<usize>,
    pub settings: SegmentationSettings,
    pub summary: AnalysisSummary,
}

/// Segment a parsed timeline into discharge sessions.
///
/// An event is a full-charge boundary when its percentage reaches the
/// threshold, when it is charging within two points of the threshold, or
/// when it crosses the threshold upward from the previous event. With no
/// boundaries at all, the whole timeline is one session.
pub fn detect_sessions(data: &ParsedBatteryData, threshold: i32) -> SessionAnalysis {
    let events = &data.events;
    let full_charge_events = find_full_charge_events(events, threshold);

    let mut sessions = Vec::new();
    if full_charge_events.is_empty() {
        if events.len() > 1 {
            sessions.push(metrics::analyze_session(events, 1));
        }
    } else {
        let mut next_id = 1;
        for (k, &start) in full_charge_events.iter().enumerate() {
            let end = full_charge_events
                .get(k + 1)
                .copied()
                .unwrap_or(events.len());
            let span = &events[start..end];

            // Discharge starts after the charging plateau at the top
            let offset = span
                .iter()
                .position(|event| event.state != BatteryState::Charging)
                .unwrap_or(span.len());
            let slice = &span[offset..];
            if slice.len() > 1 {
                sessions.push(metrics::analyze_session(slice, next_id));
                next_id += 1;
            }
        }
    }

    tracing::debug!(
        boundaries = full_charge_events.len(),
        sessions = sessions.len(),
        threshold,
        "segmented timeline"
    );

    let summary = metrics::summarize(&sessions);
    SessionAnalysis {
        sessions,
        full_charge_events,
        settings: SegmentationSettings {
            full_charge_threshold: threshold,
        },
        summary,
    }
}

fn find_full_charge_events(
    events: &[crate::report::BatteryEvent],
    threshold: i32,
) -> Vec<usize> {
    let mut found: Vec<usize> = Vec::new();

    for (i, event) in events.iter().enumerate() {
        let at_threshold = event.percent >= threshold;
        let near_full_charging =
            event.state == BatteryState::Charging && event.percent >= threshold - 2;
        let upward_crossing = i > 0
            && events[i - 1].percent < threshold
            && event.percent >= threshold;

        if at_threshold || near_full_charging || upward_crossing {
            match found.last() {
                Some(&last) if i - last <= BOUNDARY_DEDUP_WINDOW => {}
                _ => found.push(i),
            }
        }
    }

    found
}
