//! Axum extractors for catalog-API-specific request data.
//!
//! - [`Caller`] - authenticated caller identity for the gated endpoints
//! - [`ListParams`] - parsed collection query (filters + row window) with
//!   the raw pairs kept for link building

pub mod caller;
pub mod list_params;

pub use caller::Caller;
pub use list_params::ListParams;
