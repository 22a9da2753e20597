//! Development task runner for batrep.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for batrep")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages into target/man
    Man,
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man => generate_man(),
    }
}

fn generate_man() -> Result<()> {
    let out_dir = Path::new("target/man");
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let command = batrep::cli::Cli::command();
    let mut buffer = Vec::new();
    clap_mangen::Man::new(command)
        .render(&mut buffer)
        .context("failed to render man page")?;

    let path = out_dir.join("batrep.1");
    fs::write(&path, buffer).with_context(|| format!("failed to write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}
