//! Error types for the catalog REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to the structured JSON error body.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! HTTP status codes and wire error codes:
//!
//! | Error | HTTP Status | Wire code |
//! |-------|-------------|-----------|
//! | AuthenticationRequired | 403 | authentication_required |
//! | NotFound | 404 | not_found |
//! | RouteNotFound | 404 | no_route |
//! | MethodNotAllowed | 405 | method_not_allowed |
//! | BadRequest | 400 | invalid_parameter |
//! | StoreFailure | 500 | store_failure |
//!
//! Store failures are never masked as 404s or empty results; the body says
//! the store failed and the status is 5xx.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use stacks_persistence::error::StorageError;
use std::fmt;

/// The primary error type for REST API operations.
///
/// Each variant maps to one HTTP status and one wire error code.
#[derive(Debug)]
pub enum RestError {
    /// The request carried no usable credentials for a gated resource
    /// (HTTP 403).
    AuthenticationRequired,

    /// Identity lookup missed (HTTP 404).
    NotFound {
        /// The resource collection (e.g. "items").
        resource: &'static str,
        /// The record number or code that was requested.
        id: String,
    },

    /// No route matches the request path (HTTP 404).
    RouteNotFound {
        /// The request path.
        path: String,
    },

    /// The path matched but the verb is not allowed (HTTP 405).
    MethodNotAllowed {
        /// The method that was attempted.
        method: String,
        /// The request path.
        path: String,
    },

    /// The request could not be interpreted (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// The upstream catalog store failed (HTTP 500).
    StoreFailure {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::AuthenticationRequired => {
                write!(f, "Authentication credentials were not provided or are invalid")
            }
            RestError::NotFound { resource, id } => {
                write!(f, "Record not found: {}/{}", resource, id)
            }
            RestError::RouteNotFound { path } => {
                write!(f, "No route matches {}", path)
            }
            RestError::MethodNotAllowed { method, path } => {
                write!(f, "Method {} not allowed on {}", method, path)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::StoreFailure { message } => {
                write!(f, "Catalog store failure: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            RestError::AuthenticationRequired => (
                StatusCode::FORBIDDEN,
                "authentication_required",
                "Authentication credentials were not provided or are invalid".to_string(),
            ),
            RestError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Record {}/{} not found", resource, id),
            ),
            RestError::RouteNotFound { path } => (
                StatusCode::NOT_FOUND,
                "no_route",
                format!("No route matches {}", path),
            ),
            RestError::MethodNotAllowed { method, path } => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                format!("Method {} not allowed on {}", method, path),
            ),
            RestError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid_parameter", message.clone())
            }
            RestError::StoreFailure { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store_failure",
                message.clone(),
            ),
        };

        let body = serde_json::json!({
            "httpStatus": status.as_u16(),
            "error": code,
            "details": details,
        });
        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Query(e) => RestError::BadRequest {
                message: e.to_string(),
            },
            StorageError::Backend(e) => RestError::StoreFailure {
                message: e.to_string(),
            },
        }
    }
}

/// Result type alias for REST handler operations.
pub type RestResult<T> = Result<T, RestError>;
