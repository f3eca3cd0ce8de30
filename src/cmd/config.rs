//! Configuration view and initialization — `pivot-drill config`.

use anyhow::{Result, bail};
use std::path::Path;

use pivot_drill::config::{DrillConfig, ENV_PIVOT, ENV_SEED};

use super::super::ConfigCommands;

pub fn cmd_config(config_path: &Path, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        None | Some(ConfigCommands::Show) => {
            println!();
            println!("pivot-drill Configuration");
            println!("=========================");
            println!();

            let mut config = if config_path.exists() {
                println!("Config file: {}", config_path.display());
                DrillConfig::load(config_path)?
            } else {
                println!("No config file at {}", config_path.display());
                println!("Using default configuration.");
                DrillConfig::default()
            };
            println!();

            config.apply_env()?;
            println!("Effective values (with env overrides):");
            println!("  pivot = \"{}\"", config.pivot_policy());
            match config.game.seed {
                Some(seed) => println!("  seed = {}", seed),
                None => println!("  seed = (random)"),
            }
            println!("  mode = \"{}\"", config.display.mode);
            println!();
            println!("Environment: {}, {}", ENV_PIVOT, ENV_SEED);
        }
        Some(ConfigCommands::Init { force }) => {
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                );
            }
            DrillConfig::default().save(config_path)?;
            println!("Created {}", config_path.display());
        }
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
        }
    }
    Ok(())
}
