//! Observability subsystem for mockstore
//!
//! Structured, synchronous JSON logging: one line per event, deterministic
//! field ordering, errors to stderr.

mod logger;

pub use logger::{Logger, Severity};
