//! Typed error hierarchy for pivot-drill.
//!
//! Three enums cover the three fallible boundaries:
//! - `ParseError` — turning user text into the integer list handed to the engine
//! - `ChoiceError` — turning scripted text into a left/right classification
//! - `ConfigError` — loading and saving `config.toml`
//!
//! The engine itself never fails: bad pivot names fall back to `first`, and
//! finished games answer further moves with a no-op snapshot.

use thiserror::Error;

/// Errors from parsing the number list typed by the user.
///
/// The messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter at least one number.")]
    Empty,

    #[error("All entries must be integers (use spaces and/or commas).")]
    InvalidToken { token: String },
}

/// Errors from parsing a scripted classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    #[error("Unrecognized choice '{input}'. Use 'left' (l) or 'right' (r)")]
    Unrecognized { input: String },
}

/// Errors from the configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid value '{value}' for {key}")]
    InvalidEnv { key: String, value: String },

    #[error("No user configuration directory available on this platform")]
    NoConfigDir,
}
