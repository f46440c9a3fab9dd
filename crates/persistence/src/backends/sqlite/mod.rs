//! SQLite backend.
//!
//! Pooled rusqlite connections over a relational rendition of the ILS
//! export. Good for development and tests (`:memory:`) and for small
//! single-node deployments.

mod backend;
mod loader;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
