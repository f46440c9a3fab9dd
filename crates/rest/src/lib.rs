//! # stacks-rest - Library Catalog REST API
//!
//! This crate implements the read-only REST API for the Stacks library
//! catalog server: resource routing, per-resource List/Detail handlers,
//! the paginated hyperlinked collection envelope, and the authentication
//! gate on the API-user resource.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stacks_rest::{create_app, ServerConfig};
//! use stacks_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("catalog.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Endpoint | Method | Response |
//! |----------|--------|----------|
//! | `/` | GET | root discovery document |
//! | `/items/`, `/bibs/`, `/marc/`, `/eresources/` | GET | envelope of records |
//! | `/items/{id}` etc. | GET | one record |
//! | `/locations/`, `/itemtypes/`, `/itemstatuses/` | GET | envelope of code rows |
//! | `/locations/{code}` etc. | GET | one code row |
//! | `/apiusers/`, `/apiusers/{username}` | GET | gated; envelope / record |
//! | `/callnumbermatches/` | GET | bare array of call numbers |
//! | `/firstitemperlocation/` | GET | envelope of items |
//! | `/health` | GET | health status |
//!
//! Every route is GET-only: a matched path with another verb is a 405, an
//! unmatched path is a 404, and both carry the structured JSON error body
//! (`{"httpStatus", "error", "details"}`).
//!
//! ## Collection queries
//!
//! List endpoints accept `field[op]=value` filters (`exact`, `matches`,
//! `startswith`, `endswith`, `contains`, `gt`, `gte`, `lt`, `lte`,
//! `isnull`) plus `offset`/`limit`. Responses are wrapped in an envelope
//! with `totalCount`, `startRow`, `endRow`, `_links`
//! (self/previous/next), and the rows under `_embedded`.
//!
//! ## Authentication
//!
//! The `apiusers` endpoints require an API key via `Authorization: Bearer`
//! or `X-Api-Key`; anything else is open. See [`extractors::Caller`].
//!
//! ## Configuration
//!
//! Via `STACKS_*` environment variables or CLI flags; see [`ServerConfig`].
//!
//! ## Architecture
//!
//! - [`error`] - error types and the JSON error body
//! - [`config`] - server configuration
//! - [`state`] - application state (storage, configuration)
//! - [`extractors`] - caller identity and collection-query extractors
//! - [`handlers`] - request handlers, one module per resource
//! - [`responses`] - collection envelope building
//! - [`routing`] - route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use stacks_persistence::CatalogStorage;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default
/// settings. For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: CatalogStorage + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the complete catalog REST API with all handlers, middleware,
/// and configuration.
///
/// # Example
///
/// ```rust,ignore
/// use stacks_rest::{create_app_with_config, ServerConfig};
/// use stacks_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: CatalogStorage + Send + Sync + 'static,
{
    info!(
        "Creating catalog API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::api_routes::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stacks_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
