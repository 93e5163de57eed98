//! Record store subsystem for mockstore
//!
//! Owns the records for one model: validated CRUD, surrogate identifier
//! assignment, and point-in-time snapshots.
//!
//! # Design Principles
//!
//! - Every write path goes through schema validation; no bypass
//! - Identifier assignment and insertion are one critical section
//! - Identifiers are monotonic and never reused, even after delete
//! - Callers receive clones; no references into the collection escape

mod errors;
mod record;
mod record_set;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::Record;
pub use record_set::RecordSet;
pub use store::RecordStore;
