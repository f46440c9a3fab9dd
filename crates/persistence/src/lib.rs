//! # stacks-persistence - ILS Data Store Client
//!
//! Read access to the upstream library catalog store for the Stacks REST
//! API. The API layer holds no authoritative state: every record is owned
//! and persisted by the ILS, this crate only queries it.
//!
//! ## Storage trait
//!
//! [`CatalogStorage`] is the seam between the REST layer and a concrete
//! backend. It exposes a List/Detail method pair per resource, the
//! aggregate call-number operations, and API-key authentication for the
//! one gated resource.
//!
//! ## Query model
//!
//! List endpoints accept `field[op]=value` filters plus `offset`/`limit`
//! windowing. [`ListQuery`] owns that grammar; each backend maps the
//! whitelisted API field names onto its own columns. Unknown fields and
//! operators are [`QueryError`]s, which the REST layer renders as 400s.
//!
//! ## Backends
//!
//! | Feature | Backend |
//! |---------|---------|
//! | `sqlite` (default) | [`backends::sqlite::SqliteBackend`] - pooled rusqlite |
//!
//! The SQLite backend also carries the loader API used by the ILS export
//! pipeline (and tests) to populate the store; loading is deliberately not
//! part of [`CatalogStorage`], so the REST layer cannot write.

pub mod backends;
pub mod core;
pub mod error;
pub mod query;
pub mod types;

pub use core::CatalogStorage;
pub use error::{BackendError, QueryError, StorageError, StorageResult};
pub use query::{Filter, FilterOp, ListQuery};
pub use types::Page;
