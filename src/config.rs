//! Layered configuration for pivot-drill.
//!
//! Settings are read from `config.toml` in the user's configuration directory
//! (`~/.config/pivot-drill/config.toml` on Linux), then overridden by
//! environment variables, then by command-line flags.
//!
//! # Configuration File Format
//!
//! ```toml
//! [game]
//! pivot = "middle"
//! seed = 7
//!
//! [display]
//! mode = "plain"
//! ```
//!
//! | Variable            | Overrides     |
//! |---------------------|---------------|
//! | `PIVOT_DRILL_PIVOT` | `game.pivot`  |
//! | `PIVOT_DRILL_SEED`  | `game.seed`   |

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::pivot::PivotPolicy;
use crate::ui::UiMode;

pub const ENV_PIVOT: &str = "PIVOT_DRILL_PIVOT";
pub const ENV_SEED: &str = "PIVOT_DRILL_SEED";

/// Game settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSection {
    /// Pivot policy name; unknown names play as `first`
    #[serde(default = "default_pivot")]
    pub pivot: String,
    /// Fixed seed for random pivots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_pivot() -> String {
    PivotPolicy::First.to_string()
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            pivot: default_pivot(),
            seed: None,
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySection {
    #[serde(default)]
    pub mode: UiMode,
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub display: DisplaySection,
}

impl DrillConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("pivot-drill").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration, returning defaults if the file doesn't exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides on top of the file values.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(
            std::env::var(ENV_PIVOT).ok(),
            std::env::var(ENV_SEED).ok(),
        )
    }

    fn apply_overrides(
        &mut self,
        pivot: Option<String>,
        seed: Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(pivot) = pivot {
            self.game.pivot = pivot;
        }
        if let Some(seed) = seed {
            let parsed = seed.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: ENV_SEED.to_string(),
                value: seed.clone(),
            })?;
            self.game.seed = Some(parsed);
        }
        Ok(())
    }

    pub fn pivot_policy(&self) -> PivotPolicy {
        PivotPolicy::parse(&self.game.pivot)
    }
}

/// Effective settings after file, environment and CLI layering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub policy: PivotPolicy,
    pub seed: Option<u64>,
    pub mode: UiMode,
}

impl Settings {
    /// Resolve settings from a loaded config plus optional CLI overrides.
    pub fn resolve(
        config: &DrillConfig,
        pivot: Option<&str>,
        seed: Option<u64>,
        mode: Option<UiMode>,
    ) -> Self {
        Self {
            policy: pivot.map(PivotPolicy::parse).unwrap_or_else(|| config.pivot_policy()),
            seed: seed.or(config.game.seed),
            mode: mode.unwrap_or(config.display.mode),
        }
    }
}
