//! Concurrency-safe record container
//!
//! A thread-safe set of records keyed by identifier. The lock is a private
//! field and is never exposed; callers get owned clones. Lookups and
//! snapshots rely on this container's own lock alone, while check-then-act
//! sequences are serialized one level up by the store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use super::record::Record;

/// Thread-safe set of records keyed by identifier
#[derive(Debug, Default)]
pub struct RecordSet {
    inner: RwLock<BTreeMap<u64, Record>>,
}

impl RecordSet {
    /// Create an empty record set
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert or replace the record under its identifier
    pub fn add(&self, record: Record) {
        let mut inner = self.inner.write().unwrap();
        inner.insert(record.id(), record);
    }

    /// Remove the record with the given identifier, if present
    pub fn remove(&self, id: u64) {
        let mut inner = self.inner.write().unwrap();
        inner.remove(&id);
    }

    /// Returns a clone of the record with the given identifier
    pub fn get(&self, id: u64) -> Option<Record> {
        let inner = self.inner.read().unwrap();
        inner.get(&id).cloned()
    }

    /// Returns true if a record with the given identifier is stored
    pub fn contains(&self, id: u64) -> bool {
        let inner = self.inner.read().unwrap();
        inner.contains_key(&id)
    }

    /// Returns a point-in-time copy of all records, ascending by identifier
    pub fn to_vec(&self) -> Vec<Record> {
        let inner = self.inner.read().unwrap();
        inner.values().cloned().collect()
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        let inner = self.inner.read().unwrap();
        inner.len()
    }

    /// Returns true if no records are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
