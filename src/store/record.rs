//! Stored record type
//!
//! A record is a store-assigned identifier plus a mapping of column name to
//! value. The identifier lives outside the field mapping and is immutable
//! after assignment; any `id` key arriving in caller-supplied fields is
//! stripped at construction so it can never shadow the real identifier.

use serde_json::{Map, Value};

use crate::schema::ID_KEY;

/// A single schema-conformant stored entity
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Store-assigned surrogate identifier, unique within its store
    id: u64,
    /// Column name to value mapping (identifier excluded)
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record, stripping any reserved `id` entry from the fields.
    pub fn new(id: u64, mut fields: Map<String, Value>) -> Self {
        fields.remove(ID_KEY);
        Self { id, fields }
    }

    /// Returns the identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the field mapping (identifier excluded)
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the value of a single field, if present
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Flattens the record into a seed row: all fields plus the identifier.
    pub fn to_row(&self) -> Map<String, Value> {
        let mut row = self.fields.clone();
        row.insert(ID_KEY.to_string(), Value::from(self.id));
        row
    }

    /// Merges a partial field mapping over this record's fields.
    ///
    /// Presence of a key is the merge signal: every key in `patch` replaces
    /// the stored value, including explicit empty strings and nulls. Keys not
    /// mentioned keep their stored value. Any `id` key in the patch is
    /// ignored.
    pub fn merged(&self, patch: &Map<String, Value>) -> Map<String, Value> {
        let mut fields = self.fields.clone();
        for (key, value) in patch {
            if key == ID_KEY {
                continue;
            }
            fields.insert(key.clone(), value.clone());
        }
        fields
    }
}
