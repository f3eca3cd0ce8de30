use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pivot_drill::config::{DrillConfig, Settings};
use pivot_drill::errors::ConfigError;
use pivot_drill::ui::UiMode;

mod cmd;

#[derive(Parser)]
#[command(name = "pivot-drill")]
#[command(version, about = "Learn quicksort partitioning one decision at a time")]
pub struct Cli {
    /// Log engine transitions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml. Defaults to the user configuration directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play a partition game
    Play {
        /// Numbers to sort, separated by spaces and/or commas. Asked for when omitted.
        #[arg(allow_hyphen_values = true)]
        numbers: Option<String>,

        /// Pivot policy: first, middle, random (unknown names play as first)
        #[arg(short, long)]
        pivot: Option<String>,

        /// Seed for random pivots
        #[arg(long)]
        seed: Option<u64>,

        /// Play these choices instead of prompting, e.g. "l r r l" or "lrrl"
        #[arg(long, conflicts_with = "auto")]
        script: Option<String>,

        /// Answer every question correctly
        #[arg(long)]
        auto: bool,

        /// UI output mode: full, plain, json
        #[arg(long)]
        ui: Option<String>,
    },
    /// Print the sorted answer key without playing
    Key {
        /// Numbers to sort, separated by spaces and/or commas
        #[arg(allow_hyphen_values = true)]
        numbers: String,

        /// Pivot policy: first, middle, random
        #[arg(short, long)]
        pivot: Option<String>,

        /// Seed for random pivots
        #[arg(long)]
        seed: Option<u64>,

        /// UI output mode: full, plain, json
        #[arg(long)]
        ui: Option<String>,
    },
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default config.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the configuration file location
    Path,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Config file location: `--config` or the platform default.
fn config_path(cli: &Cli) -> Result<Option<PathBuf>> {
    match &cli.config {
        Some(path) => Ok(Some(path.clone())),
        None => match DrillConfig::default_path() {
            Ok(path) => Ok(Some(path)),
            Err(ConfigError::NoConfigDir) => Ok(None),
            Err(e) => Err(e.into()),
        },
    }
}

fn load_config(cli: &Cli) -> Result<DrillConfig> {
    let mut config = match config_path(cli)? {
        Some(path) => DrillConfig::load_or_default(&path)?,
        None => DrillConfig::default(),
    };
    config
        .apply_env()
        .context("Invalid environment override")?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Play {
            numbers,
            pivot,
            seed,
            script,
            auto,
            ui,
        } => {
            let config = load_config(&cli)?;
            let settings = Settings::resolve(
                &config,
                pivot.as_deref(),
                *seed,
                ui.as_deref().map(UiMode::parse),
            );
            cmd::cmd_play(&settings, numbers.as_deref(), script.as_deref(), *auto)?;
        }
        Commands::Key {
            numbers,
            pivot,
            seed,
            ui,
        } => {
            let config = load_config(&cli)?;
            let settings = Settings::resolve(
                &config,
                pivot.as_deref(),
                *seed,
                ui.as_deref().map(UiMode::parse),
            );
            cmd::cmd_key(&settings, numbers)?;
        }
        Commands::Config { command } => {
            let path = config_path(&cli)?.ok_or(ConfigError::NoConfigDir)?;
            cmd::cmd_config(&path, command.clone())?;
        }
    }

    Ok(())
}
