//! Error types for ethicore.
//!
//! All errors are strongly typed using thiserror. The engine itself never
//! fails: configuration gaps degrade to documented defaults, and structurally
//! invalid inputs are rejected by the type constructors before the engine is
//! ever invoked.

use std::path::PathBuf;

use thiserror::Error;

/// Validation errors raised while constructing engine inputs.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Score value {value} is out of range [0.0, 1.0]")]
    ScoreOutOfRange {
        value: f64,
    },

    #[error("Dimension name cannot be empty")]
    EmptyDimensionName,

    #[error("Context label cannot be empty")]
    EmptyContextLabel,
}

/// Errors raised while loading configuration documents.
///
/// A *missing* document is not an error — the loader resolves it to the
/// documented defaults. Anything else that keeps a present document from
/// becoming a typed structure is surfaced here.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read config document {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config document {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level error type for ethicore.
#[derive(Debug, Error)]
pub enum EthicoreError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config load error: {0}")]
    Load(#[from] LoadError),
}

impl EthicoreError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a config load error.
    #[must_use]
    pub const fn is_load(&self) -> bool {
        matches!(self, Self::Load(_))
    }
}

/// Result type alias for ethicore operations.
pub type EthicoreResult<T> = Result<T, EthicoreError>;
