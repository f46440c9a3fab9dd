//! Error types for the persistence layer.
//!
//! Two categories: [`QueryError`] for requests the store cannot interpret
//! (bad filter field, bad operator, bad parameter value) and
//! [`BackendError`] for failures of the store itself. The REST layer maps
//! the former to 400 and the latter to 500; identity-lookup misses are not
//! errors at all, they surface as `Ok(None)` from the storage trait.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The request asked for something the query layer cannot express.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The backing store failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors in the collection query grammar.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The filter names a field the resource does not index.
    #[error("unknown filter field '{field}' for {resource}")]
    UnknownField { resource: &'static str, field: String },

    /// The `field[op]` operator is not one the store supports.
    #[error("unknown filter operator '{operator}'")]
    UnknownOperator { operator: String },

    /// A reserved parameter (offset, limit) had an unusable value.
    #[error("invalid value for parameter '{parameter}': {message}")]
    InvalidParameter { parameter: String, message: String },

    /// A `[matches]` pattern did not compile.
    #[error("invalid pattern for '{field}': {message}")]
    InvalidPattern { field: String, message: String },
}

/// Errors raised by a concrete storage backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Could not obtain a connection to the store.
    #[error("connection to {backend_name} store failed: {message}")]
    ConnectionFailed {
        backend_name: &'static str,
        message: String,
    },

    /// A query failed to execute or a row failed to decode.
    #[error("{backend_name} query failed: {message}")]
    Execution {
        backend_name: &'static str,
        message: String,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_display() {
        let err = StorageError::from(QueryError::UnknownField {
            resource: "items",
            field: "shelf".to_string(),
        });
        assert_eq!(err.to_string(), "unknown filter field 'shelf' for items");
    }

    #[test]
    fn connection_failed_display() {
        let err = BackendError::ConnectionFailed {
            backend_name: "sqlite",
            message: "pool timed out".to_string(),
        };
        assert!(err.to_string().contains("sqlite"));
        assert!(err.to_string().contains("pool timed out"));
    }
}
