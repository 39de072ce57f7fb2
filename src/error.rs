//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for fuzzy-rank operations outside the matching core.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods in the candidate sources and the binary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a [`ScoringConfig`](crate::ScoringConfig) cannot be built.
///
/// Raised at construction time only; a config that exists is always valid.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML config was malformed, missing a weight, or had unknown keys.
    #[error("invalid TOML scoring config: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON config was malformed, missing a weight, or had unknown keys.
    #[error("invalid JSON scoring config: {0}")]
    Json(#[from] serde_json::Error),
    /// The config file extension is neither `.toml` nor `.json`.
    #[error("unsupported config format for {} (expected .toml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
    /// A weight has the wrong sign for its role.
    #[error("invalid value {value} for '{field}': expected {expected}")]
    InvalidWeight {
        field: &'static str,
        value: i32,
        expected: &'static str,
    },
}
