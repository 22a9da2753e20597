//! Serialization of computed results for downstream consumers.
//!
//! Export is pure formatting over the engine's output types; it reads
//! [`ParsedBatteryData`] and [`SessionAnalysis`] and never influences
//! parsing or segmentation.

mod csv;
mod json;

pub use self::csv::{events_to_csv, sessions_to_csv};
pub use self::json::{analysis_to_json, events_to_json};
