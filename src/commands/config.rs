//! `config` subcommand handler.

use anyhow::Result;

use batrep::cli::ConfigAction;
use batrep::Config;

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
            Ok(())
        }
        ConfigAction::Init => {
            let path = Config::config_path()?;
            if path.exists() {
                println!("Config already exists: {}", path.display());
                return Ok(());
            }
            Config::default().save()?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}
