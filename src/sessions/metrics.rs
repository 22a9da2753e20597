//! Per-session drain metrics and the aggregate summary.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::report::{BatteryEvent, BatteryState};

/// One charge-to-charge usage cycle, derived from a contiguous slice of the
/// timeline. Constructed once by the segmenter and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct BatterySession {
    /// 1-based sequence number in discovery order.
    pub session_id: usize,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_pct: i32,
    pub end_pct: i32,
    pub used_pct: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_mwh: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_mwh: Option<i64>,
    /// Present only when both endpoints carry energy readings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_mwh: Option<i64>,
    /// Wall-clock minutes between the first and last event.
    pub duration_min: f64,
    pub active_minutes: f64,
    pub idle_minutes: f64,
    pub charging_minutes: f64,
    pub active_drain_pct: f64,
    pub idle_drain_pct: f64,
    pub active_rate_pct_per_hr: f64,
    pub idle_rate_pct_per_hr: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_rate_mwh_per_hr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_rate_mwh_per_hr: Option<f64>,
    /// True iff the battery net-drained over the session; sessions that end
    /// at or above their starting charge are noise or incomplete capture.
    pub is_complete: bool,
    /// The session's own copy of its event slice.
    pub events: Vec<BatteryEvent>,
}

/// Aggregate averages over complete sessions only. All zero when no session
/// is complete.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisSummary {
    pub total_sessions: usize,
    /// Rounded mean of per-session active minutes.
    pub avg_screen_on_time: i64,
    /// Mean of per-session hourly rates (not a pooled rate), 2 decimals.
    pub avg_active_drain: f64,
    pub avg_idle_drain: f64,
}

/// Compute metrics for one session slice. The slice is non-empty by
/// construction (the segmenter only keeps slices with more than one event
/// when boundaries exist).
pub(crate) fn analyze_session(slice: &[BatteryEvent], session_id: usize) -> BatterySession {
    let first = &slice[0];
    let last = &slice[slice.len() - 1];

    let duration_min = minutes_between(first, last).max(0.0);

    let mut active_minutes = 0.0;
    let mut idle_minutes = 0.0;
    let mut charging_minutes = 0.0;
    let mut active_drain_pct = 0.0;
    let mut idle_drain_pct = 0.0;
    let mut active_drain_mwh = 0.0;
    let mut idle_drain_mwh = 0.0;

    for pair in slice.windows(2) {
        let (cur, next) = (&pair[0], &pair[1]);
        let delta_minutes = minutes_between(cur, next).max(0.0);
        let drain_pct = (cur.percent - next.percent).max(0) as f64;
        let drain_mwh = match (cur.energy_mwh, next.energy_mwh) {
            (Some(a), Some(b)) => (a - b).max(0) as f64,
            _ => 0.0,
        };

        // The whole interval is attributed to the state it started in
        match cur.state {
            BatteryState::Active => {
                active_minutes += delta_minutes;
                active_drain_pct += drain_pct;
                active_drain_mwh += drain_mwh;
            }
            BatteryState::Idle => {
                idle_minutes += delta_minutes;
                idle_drain_pct += drain_pct;
                idle_drain_mwh += drain_mwh;
            }
            BatteryState::Charging => {
                // Drain during charging is not modeled
                charging_minutes += delta_minutes;
            }
            BatteryState::Unknown => {}
        }
    }

    let used_mwh = match (first.energy_mwh, last.energy_mwh) {
        (Some(start), Some(end)) => Some((start - end).max(0)),
        _ => None,
    };

    BatterySession {
        session_id,
        start_time: first.timestamp,
        end_time: last.timestamp,
        start_pct: first.percent,
        end_pct: last.percent,
        used_pct: (first.percent - last.percent).max(0),
        start_mwh: first.energy_mwh,
        end_mwh: last.energy_mwh,
        used_mwh,
        duration_min,
        active_minutes,
        idle_minutes,
        charging_minutes,
        active_drain_pct,
        idle_drain_pct,
        active_rate_pct_per_hr: hourly_rate(active_drain_pct, active_minutes),
        idle_rate_pct_per_hr: hourly_rate(idle_drain_pct, idle_minutes),
        active_rate_mwh_per_hr: optional_hourly_rate(active_drain_mwh, active_minutes),
        idle_rate_mwh_per_hr: optional_hourly_rate(idle_drain_mwh, idle_minutes),
        is_complete: last.percent < first.percent,
        events: slice.to_vec(),
    }
}

/// Average the complete sessions. Mean-of-rates by contract: this is not the
/// pooled drain-over-time rate and is sensitive to session-length skew.
pub(crate) fn summarize(sessions: &[BatterySession]) -> AnalysisSummary {
    let complete: Vec<&BatterySession> =
        sessions.iter().filter(|session| session.is_complete).collect();
    if complete.is_empty() {
        return AnalysisSummary::default();
    }

    let n = complete.len() as f64;
    let mean = |select: fn(&BatterySession) -> f64| -> f64 {
        complete.iter().map(|s| select(s)).sum::<f64>() / n
    };

    AnalysisSummary {
        total_sessions: complete.len(),
        avg_screen_on_time: mean(|s| s.active_minutes).round() as i64,
        avg_active_drain: round2(mean(|s| s.active_rate_pct_per_hr)),
        avg_idle_drain: round2(mean(|s| s.idle_rate_pct_per_hr)),
    }
}

fn minutes_between(a: &BatteryEvent, b: &BatteryEvent) -> f64 {
    (b.timestamp - a.timestamp).num_seconds() as f64 / 60.0
}

fn hourly_rate(drain: f64, minutes: f64) -> f64 {
    if minutes > 0.0 {
        drain / (minutes / 60.0)
    } else {
        0.0
    }
}

/// Energy rates stay absent (rather than zero) when nothing drained.
fn optional_hourly_rate(drain: f64, minutes: f64) -> Option<f64> {
    (minutes > 0.0 && drain > 0.0).then(|| drain / (minutes / 60.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
