//! Error types for the `glott-config` crate.

use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for configuration loading and lookup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Lookup of an option name that is not part of the pipeline schema.
    #[error("unknown configuration field: '{0}'")]
    FieldNotFound(String),

    /// A schema invariant does not hold (parallel-array mismatch, value
    /// out of range). Always fatal at load time.
    #[error("configuration invariant violated: {0}")]
    Invariant(String),

    /// I/O error while reading a configuration document.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration document is not valid JSON for the schema.
    #[error("malformed configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    /// Creates a new I/O error with the given path and error.
    pub fn io_error<P: Into<PathBuf>>(path: P, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source: error,
        }
    }
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
