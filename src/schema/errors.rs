//! Schema validation error types
//!
//! Error codes:
//! - SCHEMA_COLUMN_COUNT - field mapping has the wrong number of entries
//! - SCHEMA_COLUMN_NAME - field mapping is missing a declared column
//!
//! Errors are constructed per call and carry their own context; no error
//! state is shared between validations.

use std::fmt;

/// Schema validation error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Entry count does not match the column count
    ColumnCount,
    /// A declared column is absent from the field mapping
    ColumnName,
}

impl SchemaErrorCode {
    /// Returns the string code used in logs and responses
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::ColumnCount => "SCHEMA_COLUMN_COUNT",
            SchemaErrorCode::ColumnName => "SCHEMA_COLUMN_NAME",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema validation error with full context
#[derive(Debug, Clone)]
pub struct SchemaError {
    /// Error code
    code: SchemaErrorCode,
    /// Human-readable message
    message: String,
    /// Offending column name, for ColumnName errors
    column: Option<String>,
}

impl SchemaError {
    /// Create a column count error
    pub fn column_count(expected: usize, actual: usize) -> Self {
        Self {
            code: SchemaErrorCode::ColumnCount,
            message: format!("has wrong count of columns: expected {}, got {}", expected, actual),
            column: None,
        }
    }

    /// Create a column name error for a missing column
    pub fn column_name(column: impl Into<String>) -> Self {
        let name = column.into();
        Self {
            code: SchemaErrorCode::ColumnName,
            message: format!("has wrong column: missing '{}'", name),
            column: Some(name),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the offending column name, if applicable
    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
