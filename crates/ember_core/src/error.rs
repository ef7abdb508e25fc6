//! # Core Error Types
//!
//! All errors that can occur while configuring an emitter.

use thiserror::Error;

/// Errors that can occur in the particle engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmberError {
    /// The particle pool or render buffer could not be allocated.
    ///
    /// Fatal for the `configure` call that produced it. The emitter is left
    /// unconfigured.
    #[error("allocation failed: {requested} slots of {element_size} bytes")]
    Allocation {
        /// Number of slots requested.
        requested: usize,
        /// Size of one slot in bytes.
        element_size: usize,
    },

    /// The configuration was rejected.
    ///
    /// The engine only rejects a zero capacity. Loaders report everything
    /// else through this variant before the config reaches the engine.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

/// Result type for engine operations.
pub type EmberResult<T> = Result<T, EmberError>;
