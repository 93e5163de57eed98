//! Seed document error types
//!
//! Load and persist failures for a model's seed document. A model whose
//! document fails to load is unavailable, but the caller decides whether
//! other models keep the process alive.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for seed operations
pub type SeedResult<T> = Result<T, SeedError>;

/// Errors while loading or persisting a seed document
#[derive(Debug, Error)]
pub enum SeedError {
    /// Underlying read/write failure
    #[error("seed file I/O failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Document failed to parse or serialize
    #[error("seed document format error in '{path}': {source}")]
    Format {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Column declarations are structurally invalid
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A seed row was rejected; the whole load is aborted
    #[error("seed row {row} rejected: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: StoreError,
    },
}

impl SeedError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a format error with path context
    pub fn format(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid row error with the offending row index
    pub fn invalid_row(row: usize, source: StoreError) -> Self {
        Self::InvalidRow { row, source }
    }
}
