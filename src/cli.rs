//! CLI argument definitions.
//!
//! Lives in the library so xtask can generate man pages from the same
//! command tree the binary parses.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Version string with git SHA and build date for dev builds.
pub fn long_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let mut version = env!("CARGO_PKG_VERSION").to_string();
        if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
            let short = &sha[..sha.len().min(7)];
            version.push_str(&format!(" ({short})"));
        }
        if let Some(date) = option_env!("BATREP_BUILD_DATE") {
            version.push_str(&format!(" built {date}"));
        }
        version
    })
}

#[derive(Debug, Parser)]
#[command(
    name = "batrep",
    version = long_version(),
    about = "Parse Windows battery reports and analyze discharge sessions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Parse a report and print an analysis overview
    Analyze {
        /// Battery report file (plain text or HTML)
        file: PathBuf,
        /// Full-charge threshold percentage (overrides config)
        #[arg(long)]
        threshold: Option<i32>,
    },
    /// List discharge sessions with drain metrics
    Sessions {
        /// Battery report file (plain text or HTML)
        file: PathBuf,
        /// Full-charge threshold percentage (overrides config)
        #[arg(long)]
        threshold: Option<i32>,
        /// Emit the full analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a report for data-quality issues
    Validate {
        /// Battery report file (plain text or HTML)
        file: PathBuf,
    },
    /// Export parsed events or session metrics
    Export {
        /// Battery report file (plain text or HTML)
        file: PathBuf,
        /// Output serialization
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// What to export
        #[arg(long, value_enum, default_value_t = ExportKind::Events)]
        what: ExportKind,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Full-charge threshold percentage (overrides config)
        #[arg(long)]
        threshold: Option<i32>,
    },
    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with default settings
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    Events,
    Sessions,
}
