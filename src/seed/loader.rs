//! Seed loader: reads a model's seed document into a record store
//!
//! Loading is all-or-nothing: every seed row is validated against the schema
//! up front, failing fast on the first invalid row with its index, and only
//! then is a fresh store populated. Rows are inserted in document order, so
//! identifiers run 1..=N in seed order; that mapping is the canonical one.

use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::Logger;
use crate::schema::{Schema, ID_KEY};
use crate::store::RecordStore;

use super::document::SeedDocument;
use super::errors::{SeedError, SeedResult};

/// Loads a record store from a seed document on disk
pub struct SeedLoader {
    /// Path to the model's JSON document
    path: PathBuf,
}

impl SeedLoader {
    /// Create a loader for the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads, parses, validates, and populates a fresh store.
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `Format` if the document does not parse, with path and cause
    /// - `InvalidSchema` if the column declarations are malformed
    /// - `InvalidRow` on the first seed row failing validation; the store
    ///   is not partially populated
    pub fn load(&self) -> SeedResult<RecordStore> {
        let path = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).map_err(|e| SeedError::io(&path, e))?;
        let document: SeedDocument =
            serde_json::from_str(&content).map_err(|e| SeedError::format(&path, e))?;

        let store = Self::load_document(document);
        match &store {
            Ok(store) => Logger::info(
                "seed_loaded",
                &[
                    ("model", store.name()),
                    ("path", &path),
                    ("rows", &store.len().to_string()),
                ],
            ),
            Err(err) => Logger::error(
                "seed_load_failed",
                &[("path", &path), ("reason", &err.to_string())],
            ),
        }
        store
    }

    /// Populates a fresh store from an already-parsed document.
    pub fn load_document(document: SeedDocument) -> SeedResult<RecordStore> {
        let schema = Schema::new(document.columns);
        schema.validate_structure().map_err(SeedError::InvalidSchema)?;

        // Fail fast before touching the store; a prior persist may have left
        // an id field in each row, which validation already discounts.
        for (row, seed) in document.seeds.iter().enumerate() {
            schema
                .validate(seed)
                .map_err(|e| SeedError::invalid_row(row, e.into()))?;
        }

        let store = RecordStore::new(document.name, schema);
        for (row, mut seed) in document.seeds.into_iter().enumerate() {
            seed.remove(ID_KEY);
            store
                .insert(seed)
                .map_err(|e| SeedError::invalid_row(row, e))?;
        }

        Ok(store)
    }
}
