//! Terminal handlers for requests no route accepts.
//!
//! Two distinct failure modes, both with structured JSON bodies:
//!
//! - the path matched a route but the verb did not: 405
//!   (`method_not_allowed`), wired as the per-route [`MethodRouter`]
//!   fallback so it fires before any handler body
//! - nothing matched the path at all: 404 (`no_route`), wired as the
//!   router-level fallback
//!
//! [`MethodRouter`]: axum::routing::MethodRouter

use axum::http::{Method, Uri};
use tracing::debug;

use crate::error::RestError;

/// Fallback for a matched path with a disallowed verb.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> RestError {
    debug!(method = %method, path = %uri.path(), "Rejecting disallowed method");
    RestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for a path no route matches.
pub async fn no_route_handler(uri: Uri) -> RestError {
    debug!(path = %uri.path(), "No route matches");
    RestError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
