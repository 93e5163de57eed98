//! Schema subsystem for mockstore
//!
//! Schemas define the exact field set of every record in a store and are
//! enforced on every write path: seed load, insert, and update.
//!
//! # Design Principles
//!
//! - Presence and count validation only; declared types are not enforced
//! - Validation errors are per-call values, never shared state
//! - The identifier key is reserved and excluded from validation

mod errors;
mod types;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use types::{Column, Schema, ID_KEY};
