//! `export` subcommand handler.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use batrep::cli::{ExportFormat, ExportKind};
use batrep::export::{analysis_to_json, events_to_csv, events_to_json, sessions_to_csv};
use batrep::sessions::detect_sessions;

use super::{load_and_parse, resolve_threshold};

/// Serialize events or sessions to stdout or a file.
pub fn run(
    file: &Path,
    format: ExportFormat,
    what: ExportKind,
    output: Option<&Path>,
    threshold: Option<i32>,
) -> Result<()> {
    let data = load_and_parse(file)?;

    let rendered = match what {
        ExportKind::Events => match format {
            ExportFormat::Csv => events_to_csv(&data)?,
            ExportFormat::Json => events_to_json(&data)?,
        },
        ExportKind::Sessions => {
            let threshold = resolve_threshold(threshold)?;
            let analysis = detect_sessions(&data, threshold);
            match format {
                ExportFormat::Csv => sessions_to_csv(&analysis)?,
                ExportFormat::Json => analysis_to_json(&analysis)?,
            }
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
