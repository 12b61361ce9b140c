//! Error types for the configurator engine
//!
//! The engine favors degrading gracefully over halting: unknown catalog
//! ids resolve to sentinels and zero prices instead of errors, and
//! rejected size changes surface as normalizer transition notices. The
//! variants here cover the boundaries that do reject input wholesale.

use thiserror::Error;

/// Unified error type for the engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Persisted project bundle could not be parsed or is missing
    /// required sections. Never partially applied.
    #[error("invalid project bundle: {message}")]
    InvalidBundle { message: String },

    /// Serialization of an export payload failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl EngineError {
    pub fn invalid_bundle(message: impl Into<String>) -> Self {
        Self::InvalidBundle {
            message: message.into(),
        }
    }
}

/// Result alias using [`EngineError`]
pub type EngineResult<T> = Result<T, EngineError>;
