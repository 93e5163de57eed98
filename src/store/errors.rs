//! Store error types
//!
//! The request layer maps these onto transport outcomes: not-found and
//! validation failures are distinct so they can become distinct statuses.

use std::fmt;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by record store operations
#[derive(Debug, Clone)]
pub enum StoreError {
    /// No record with the given identifier
    NotFound(u64),

    /// Field mapping rejected by schema validation
    Validation(SchemaError),
}

impl StoreError {
    /// Create a not found error
    pub fn not_found(id: u64) -> Self {
        Self::NotFound(id)
    }

    /// Returns true if this is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Get error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(err) => err.code().code(),
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record with id {} does not exist", id),
            Self::Validation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<SchemaError> for StoreError {
    fn from(err: SchemaError) -> Self {
        Self::Validation(err)
    }
}
