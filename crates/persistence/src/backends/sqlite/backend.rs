//! SQLite backend construction and connection management.

use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use regex::Regex;
use rusqlite::Connection;
use rusqlite::functions::FunctionFlags;
use serde::{Deserialize, Serialize};

use crate::error::{BackendError, StorageError, StorageResult};

use super::schema;

pub(super) const BACKEND_NAME: &str = "sqlite";

/// SQLite backend for the catalog store.
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquisition timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend.
    pub fn in_memory() -> StorageResult<Self> {
        Self::with_config(":memory:", SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database.
    pub fn open<P: AsRef<Path>>(path: P) -> StorageResult<Self> {
        Self::with_config(path, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        config: SqliteBackendConfig,
    ) -> StorageResult<Self> {
        let is_memory = path.as_ref().to_string_lossy() == ":memory:";

        let busy_timeout = Duration::from_millis(config.busy_timeout_ms);
        let manager = SqliteConnectionManager::file(path.as_ref()).with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            conn.pragma_update(None, "foreign_keys", true)?;
            register_regexp(conn)
        });

        // An in-memory database exists per connection; a single-connection
        // pool keeps every request on the same schema.
        let max_size = if is_memory { 1 } else { config.max_connections };

        let pool = Pool::builder()
            .max_size(max_size)
            .min_idle(Some(1))
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build(manager)
            .map_err(|e| BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME,
                message: e.to_string(),
            })?;

        Ok(Self {
            pool,
            config,
            is_memory,
        })
    }

    /// Creates the catalog tables and indexes if they do not exist.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.conn()?;
        schema::init_schema(&conn).map_err(map_sql_err)
    }

    /// Whether this backend is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// The backend configuration in effect.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }

    pub(super) fn conn(&self) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: BACKEND_NAME,
                message: e.to_string(),
            })
        })
    }
}

/// Maps a rusqlite error to a backend execution error.
pub(super) fn map_sql_err(err: rusqlite::Error) -> StorageError {
    StorageError::Backend(BackendError::Execution {
        backend_name: BACKEND_NAME,
        message: err.to_string(),
    })
}

/// Registers the `REGEXP` scalar function backing the `[matches]` operator.
///
/// SQLite evaluates `text REGEXP pattern` as `regexp(pattern, text)`.
/// Patterns are validated at query-build time, so a compile failure here
/// means the pattern changed between validation and execution.
fn register_regexp(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "regexp",
        2,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let pattern = ctx.get::<String>(0)?;
            let text = ctx.get::<Option<String>>(1)?;
            let re = Regex::new(&pattern)
                .map_err(|e| rusqlite::Error::UserFunctionError(Box::new(e)))?;
            Ok(text.map(|t| re.is_match(&t)).unwrap_or(false))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_backend_initializes() {
        let backend = SqliteBackend::in_memory().unwrap();
        assert!(backend.is_memory());
        backend.init_schema().unwrap();
        // Idempotent
        backend.init_schema().unwrap();
    }

    #[test]
    fn regexp_function_is_available() {
        let backend = SqliteBackend::in_memory().unwrap();
        let conn = backend.conn().unwrap();
        let matched: bool = conn
            .query_row("SELECT 'ML410 .B1' REGEXP '^ML'", [], |r| r.get(0))
            .unwrap();
        assert!(matched);
        let matched: bool = conn
            .query_row("SELECT 'PS3554' REGEXP '^ML'", [], |r| r.get(0))
            .unwrap();
        assert!(!matched);
    }

    #[test]
    fn config_defaults() {
        let config = SqliteBackendConfig::default();
        assert_eq!(config.max_connections, 10);
        assert_eq!(config.busy_timeout_ms, 5000);
    }
}
