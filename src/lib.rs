//! Battery Report Analyzer.
//!
//! Parses Windows battery usage reports (`powercfg /batteryreport`, plain
//! text or HTML), reconstructs the chronological event timeline, segments it
//! into discharge sessions bounded by full-charge events, and computes
//! per-session drain metrics.
//!
//! Pipeline: raw bytes/text -> [`parser::parse`] -> [`ParsedBatteryData`] ->
//! [`sessions::detect_sessions`] -> [`SessionAnalysis`]. Both stages are
//! pure functions over their inputs; parsing never fails, it collects
//! per-line diagnostics instead.

pub mod cli;
pub mod config;
pub mod export;
pub mod parser;
pub mod report;
pub mod sessions;

pub use config::Config;
pub use report::{
    BatteryEvent, BatteryState, ParsedBatteryData, ReportMetadata, TimeRange,
    ValidationReport,
};
pub use sessions::{
    AnalysisSummary, BatterySession, SessionAnalysis, DEFAULT_FULL_CHARGE_THRESHOLD,
};
