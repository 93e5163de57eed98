//! On-disk seed document shape
//!
//! One JSON document per model:
//!
//! ```json
//! {
//!   "resource_name": "users",
//!   "columns": [{"name": "name", "type": "string"}],
//!   "seeds": [{"name": "Alice"}]
//! }
//! ```
//!
//! Seed rows may carry an `id` field from a prior persist; it is tolerated
//! on load, excluded from validation, and never honored as the assigned
//! identifier.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::Column;

/// A model's seed document: name, column declarations, and seed rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDocument {
    /// Resource name the model is served under
    #[serde(rename = "resource_name")]
    pub name: String,
    /// Ordered column declarations
    pub columns: Vec<Column>,
    /// Seed rows, mapping column name to value
    #[serde(default)]
    pub seeds: Vec<Map<String, Value>>,
}

impl SeedDocument {
    /// Create a document
    pub fn new(name: impl Into<String>, columns: Vec<Column>, seeds: Vec<Map<String, Value>>) -> Self {
        Self {
            name: name.into(),
            columns,
            seeds,
        }
    }
}
