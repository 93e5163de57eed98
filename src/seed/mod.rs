//! Seed document subsystem for mockstore
//!
//! One JSON document per model holds its resource name, column declarations,
//! and seed rows. The loader turns a document into a populated record store;
//! the writer flattens a store back into the document.
//!
//! # Design Principles
//!
//! - Load is all-or-nothing: the first invalid row aborts the whole load
//! - Identifiers are assigned 1..=N in seed order on load
//! - Persist is write-temp-then-rename; the previous document survives
//!   any mid-write failure

mod document;
mod errors;
mod loader;
mod writer;

pub use document::SeedDocument;
pub use errors::{SeedError, SeedResult};
pub use loader::SeedLoader;
pub use writer::SeedWriter;
