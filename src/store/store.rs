//! Record store with validated CRUD and identifier assignment
//!
//! One store per model. The store serializes access to its records; it
//! spawns no concurrency of its own. The identifier counter and every
//! check-then-act write sequence are guarded by a single store-level mutex,
//! so two concurrent inserts can never receive the same identifier and an
//! update's existence check cannot race its replace. Lookups and snapshots
//! go through the record set's own lock only.

use serde_json::{Map, Value};

use crate::schema::Schema;

use super::errors::{StoreError, StoreResult};
use super::record::Record;
use super::record_set::RecordSet;

/// Write-side state protected by the store mutex.
#[derive(Debug)]
struct WriteState {
    /// Last assigned identifier; incremented once per successful insert,
    /// never reused, untouched by update and delete.
    current_id: u64,
}

/// Schema-validated, concurrency-safe record store for one model
#[derive(Debug)]
pub struct RecordStore {
    /// Resource name this store backs (used for the persisted document)
    name: String,
    /// Column schema every record must conform to
    schema: Schema,
    /// Owned record collection, keyed by identifier
    records: RecordSet,
    /// Store-level critical section for identifier assignment and
    /// check-then-act writes.
    write: std::sync::Mutex<WriteState>,
}

impl RecordStore {
    /// Create an empty store for the given model name and schema
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            records: RecordSet::new(),
            write: std::sync::Mutex::new(WriteState { current_id: 0 }),
        }
    }

    /// Returns the resource name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the schema (read-only)
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns true if a record with the given identifier is stored
    pub fn exists(&self, id: u64) -> bool {
        self.records.contains(id)
    }

    /// Returns a copy of the record with the given identifier.
    ///
    /// Absence is not an error.
    pub fn get(&self, id: u64) -> Option<Record> {
        self.records.get(id)
    }

    /// Validates the fields and inserts a new record.
    ///
    /// On success the record carries the next store-wide identifier. The
    /// increment and the insertion form one critical section.
    pub fn insert(&self, fields: Map<String, Value>) -> StoreResult<Record> {
        self.schema.validate(&fields)?;

        let mut write = self.write.lock().unwrap();
        write.current_id += 1;
        let record = Record::new(write.current_id, fields);
        self.records.add(record.clone());
        Ok(record)
    }

    /// Validates the fields and replaces the record's fields wholesale.
    ///
    /// The identifier is re-asserted from the store, never taken from
    /// `fields`; the identifier counter is untouched. Fails with `NotFound`
    /// if no record with that identifier exists.
    pub fn update(&self, id: u64, fields: Map<String, Value>) -> StoreResult<Record> {
        self.schema.validate(&fields)?;

        let _write = self.write.lock().unwrap();
        if !self.records.contains(id) {
            return Err(StoreError::not_found(id));
        }
        let record = Record::new(id, fields);
        self.records.add(record.clone());
        Ok(record)
    }

    /// Merges a partial field mapping into the stored record and replaces it.
    ///
    /// Keys present in `patch` overwrite stored values; keys not mentioned
    /// are preserved. The merged full field set goes through the same schema
    /// validation as a full update. Lookup, merge, validation, and replace
    /// share one critical section.
    pub fn update_partial(&self, id: u64, patch: &Map<String, Value>) -> StoreResult<Record> {
        let _write = self.write.lock().unwrap();
        let existing = self.records.get(id).ok_or_else(|| StoreError::not_found(id))?;

        let fields = existing.merged(patch);
        self.schema.validate(&fields)?;

        let record = Record::new(id, fields);
        self.records.add(record.clone());
        Ok(record)
    }

    /// Removes the record if present. Idempotent; deleting an absent
    /// identifier is not an error. Deleted identifiers are never reassigned.
    pub fn delete(&self, id: u64) {
        self.records.remove(id);
    }

    /// Returns a point-in-time copy of all records, sorted by identifier
    /// ascending.
    pub fn snapshot(&self) -> Vec<Record> {
        self.records.to_vec()
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
