//! # Loader Error Types

use std::path::PathBuf;

use ember_core::EmberError;
use thiserror::Error;

/// Errors that can occur while loading an emitter document.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid TOML or has mistyped fields.
    #[error("failed to parse emitter document: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document could not be written.
    #[error("failed to serialize emitter document: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field holds a value the engine cannot run with.
    #[error("invalid field `{field}`: {reason}")]
    Invalid {
        /// Field name as written in the document.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// Result type for loader operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl From<ConfigError> for EmberError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
