//! batrep binary entry point.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use batrep::cli::{Cli, Commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { file, threshold } => commands::analyze::run(&file, threshold),
        Commands::Sessions {
            file,
            threshold,
            json,
        } => commands::sessions::run(&file, threshold, json),
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Export {
            file,
            format,
            what,
            output,
            threshold,
        } => commands::export::run(&file, format, what, output.as_deref(), threshold),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "batrep",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}
