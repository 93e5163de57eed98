//! Schema type definitions
//!
//! A schema is an ordered list of named columns. The declared column type is
//! descriptive metadata only: validation checks presence and count, never
//! value types. This mirrors the mock-API use case where seed data is
//! hand-written and loosely typed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{SchemaError, SchemaResult};

/// Reserved key for the store-assigned surrogate identifier.
///
/// Never part of a schema; stripped from field mappings before validation.
pub const ID_KEY: &str = "id";

/// A named, typed column declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within a schema
    pub name: String,
    /// Declared type, descriptive only (not enforced)
    #[serde(rename = "type")]
    pub column_type: String,
}

impl Column {
    /// Create a new column
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// An ordered sequence of columns defining the exact field set of a record
/// (excluding the identifier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a new schema from an ordered column list
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns the columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Validates the schema structure itself (not a field mapping).
    ///
    /// Column names must be non-empty, unique, and none may be the reserved
    /// identifier key.
    pub fn validate_structure(&self) -> Result<(), String> {
        for (i, column) in self.columns.iter().enumerate() {
            if column.name.is_empty() {
                return Err(format!("column {} has an empty name", i));
            }
            if column.name == ID_KEY {
                return Err(format!("column name '{}' is reserved", ID_KEY));
            }
            if self.columns[..i].iter().any(|c| c.name == column.name) {
                return Err(format!("duplicate column name '{}'", column.name));
            }
        }
        Ok(())
    }

    /// Validates a field mapping against this schema.
    ///
    /// An `id` entry is discounted before checking. The entry count must
    /// equal the column count, and every column name must be present.
    /// Values are not type-checked.
    ///
    /// Applied identically on seed load, insert, and update.
    pub fn validate(&self, fields: &Map<String, Value>) -> SchemaResult<()> {
        let mut effective = fields.len();
        if fields.contains_key(ID_KEY) {
            effective -= 1;
        }

        if effective != self.columns.len() {
            return Err(SchemaError::column_count(self.columns.len(), effective));
        }

        for column in &self.columns {
            if !fields.contains_key(&column.name) {
                return Err(SchemaError::column_name(&column.name));
            }
        }

        Ok(())
    }
}
