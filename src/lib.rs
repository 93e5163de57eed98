//! mockstore - a schema-validated, concurrency-safe in-memory record store
//!
//! Each model owns a fixed column schema and a set of seed records; the store
//! serves validated CRUD with stable surrogate identifiers and can flatten its
//! state back into durable seed data.

pub mod observability;
pub mod schema;
pub mod seed;
pub mod store;
