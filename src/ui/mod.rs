//! Terminal presentation of game snapshots.
//!
//! Output modes:
//! - `full`: colors and emoji
//! - `plain`: unstyled text, stable for scripts and tests
//! - `json`: one serialized snapshot per line

pub mod board;
pub mod icons;

pub use board::BoardUI;

use serde::{Deserialize, Serialize};

/// Output mode for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    /// Colored board with emoji
    #[default]
    Full,
    /// Unstyled text
    Plain,
    /// JSON snapshots
    Json,
}

impl std::str::FromStr for UiMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "plain" => Self::Plain,
            _ => Self::Full,
        })
    }
}

impl UiMode {
    /// Parse UI mode from string, defaulting to `full`.
    pub fn parse(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for UiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiMode::Full => write!(f, "full"),
            UiMode::Plain => write!(f, "plain"),
            UiMode::Json => write!(f, "json"),
        }
    }
}
