//! Storage backend implementations.
//!
//! Backends are selected by cargo feature; `sqlite` is the default and the
//! one the server binary ships with.

#[cfg(feature = "sqlite")]
pub mod sqlite;
