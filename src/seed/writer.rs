//! Seed writer: persists a record store back to its seed document
//!
//! The document is rebuilt from the store's name, columns, and an
//! identifier-ordered snapshot, then written to a temporary file next to the
//! target and renamed into place. A failure mid-write leaves the previous
//! document untouched; the file is never readable in a truncated state.

use std::fs;
use std::path::{Path, PathBuf};

use crate::observability::Logger;
use crate::store::RecordStore;

use super::document::SeedDocument;
use super::errors::{SeedError, SeedResult};

/// Persists a record store's contents as a seed document
pub struct SeedWriter {
    /// Path to the model's JSON document
    path: PathBuf,
}

impl SeedWriter {
    /// Create a writer for the given document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the store's current contents to the document path.
    ///
    /// Read-only with respect to the store: the identifier counter and
    /// records are untouched. Each snapshot record becomes a seed row
    /// carrying its identifier, ascending by identifier.
    pub fn save(&self, store: &RecordStore) -> SeedResult<()> {
        let path = self.path.display().to_string();

        let document = SeedDocument::new(
            store.name(),
            store.schema().columns().to_vec(),
            store.snapshot().iter().map(|r| r.to_row()).collect(),
        );

        let content =
            serde_json::to_string_pretty(&document).map_err(|e| SeedError::format(&path, e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| {
            Logger::error("seed_persist_failed", &[("path", &path), ("reason", &e.to_string())]);
            SeedError::io(tmp.display().to_string(), e)
        })?;

        fs::rename(&tmp, &self.path).map_err(|e| {
            // Don't leave the temp file behind on a failed rename.
            let _ = fs::remove_file(&tmp);
            Logger::error("seed_persist_failed", &[("path", &path), ("reason", &e.to_string())]);
            SeedError::io(&path, e)
        })?;

        Logger::info(
            "seeds_persisted",
            &[
                ("model", store.name()),
                ("path", &path),
                ("rows", &document.seeds.len().to_string()),
            ],
        );
        Ok(())
    }
}
