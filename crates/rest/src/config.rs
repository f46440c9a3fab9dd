//! Server configuration for the catalog REST API.
//!
//! This module provides configuration types for the REST server, supporting
//! both programmatic configuration and environment variable overrides.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `STACKS_SERVER_PORT` | 8080 | Server port |
//! | `STACKS_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `STACKS_LOG_LEVEL` | info | Log level |
//! | `STACKS_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `STACKS_ENABLE_CORS` | true | Enable CORS |
//! | `STACKS_CORS_ORIGINS` | * | Allowed origins |
//! | `STACKS_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `STACKS_CORS_HEADERS` | Content-Type,Authorization,Accept,X-Api-Key | Allowed headers |
//! | `STACKS_BASE_URL` | http://localhost:8080 | Server base URL |
//! | `STACKS_DATABASE_URL` | (in-memory) | Catalog database path |
//! | `STACKS_DEFAULT_PAGE_SIZE` | 20 | Default collection page size |
//! | `STACKS_MAX_PAGE_SIZE` | 100 | Maximum collection page size |
//! | `STACKS_TIMEZONE` | UTC | Timezone name reported in serverTime |
//!
//! # Example
//!
//! ```rust
//! use stacks_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     enable_cors: true,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;

/// Server configuration for the catalog REST API.
///
/// This struct can be constructed from environment variables using
/// [`ServerConfig::from_env`], from command line arguments using
/// [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "stacks")]
#[command(about = "Library catalog REST API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "STACKS_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "STACKS_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "STACKS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "STACKS_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "STACKS_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "STACKS_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "STACKS_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(
        long,
        env = "STACKS_CORS_HEADERS",
        default_value = "Content-Type,Authorization,Accept,X-Api-Key"
    )]
    pub cors_headers: String,

    /// Base URL for the server (used in envelope and root document links).
    #[arg(long, env = "STACKS_BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// Catalog database path. Omit for an in-memory database.
    #[arg(long, env = "STACKS_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Default page size for collection responses.
    #[arg(long, env = "STACKS_DEFAULT_PAGE_SIZE", default_value = "20")]
    pub default_page_size: usize,

    /// Maximum page size for collection responses.
    #[arg(long, env = "STACKS_MAX_PAGE_SIZE", default_value = "100")]
    pub max_page_size: usize,

    /// Timezone name reported in the root document's serverTime.
    #[arg(long, env = "STACKS_TIMEZONE", default_value = "UTC")]
    pub timezone: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Authorization,Accept,X-Api-Key".to_string(),
            base_url: "http://localhost:8080".to_string(),
            database_url: None,
            default_page_size: 20,
            max_page_size: 100,
            timezone: "UTC".to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    ///
    /// Port 0 is valid; it asks the OS to assign an ephemeral port.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if self.default_page_size > self.max_page_size {
            errors.push("Default page size cannot exceed max page size".to_string());
        }

        if self.base_url.ends_with('/') {
            errors.push("Base URL must not end with a slash".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses ephemeral port 0 and disables features that might interfere with
    /// tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            base_url: "https://example.com/api/v1".to_string(),
            database_url: None,
            default_page_size: 20,
            max_page_size: 100,
            timezone: "America/Chicago".to_string(),
        }
    }
}
