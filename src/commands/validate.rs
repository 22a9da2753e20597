//! `validate` subcommand handler.
//!
//! Validation is advisory in the library; the CLI turns it into an exit
//! code so scripts can gate on it.

use std::path::Path;

use anyhow::Result;

use batrep::report::validate;

use super::load_and_parse;

pub fn run(file: &Path) -> Result<()> {
    let data = load_and_parse(file)?;
    let report = validate(&data);

    for error in &data.errors {
        println!("warning: {error}");
    }

    if report.is_valid {
        println!("OK: {} events, no issues", data.metadata.total_events);
        return Ok(());
    }

    for issue in &report.issues {
        println!("issue: {issue}");
    }
    std::process::exit(1);
}
