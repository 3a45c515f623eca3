/// Database connection pool management
///
/// This module provides the SQLite connection pool used by every handler.
/// Foreign-key enforcement is switched on per connection here; the schema
/// declares the constraints, but SQLite ignores them unless the pragma is
/// enabled, and the "task owner must exist" guarantee depends on it.
///
/// # Example
///
/// ```no_run
/// use lombard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://lombard.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///
///     let row: (i64,) = sqlx::query_as("SELECT 1")
///         .fetch_one(&pool)
///         .await?;
///     assert_eq!(row.0, 1);
///     Ok(())
/// }
/// ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the database connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. "sqlite://lombard.db", "sqlite::memory:")
    pub url: String,

    /// Maximum number of connections in the pool
    ///
    /// Note: an in-memory database must use exactly 1 connection, since
    /// every new SQLite connection to ":memory:" opens a fresh database.
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 5,
            connect_timeout_seconds: 30,
        }
    }
}

/// Creates and initializes the SQLite connection pool
///
/// This function:
/// 1. Parses the connection URL, creating the database file if missing
/// 2. Enables foreign-key enforcement on every connection
/// 3. Performs a health check to verify the database is usable
///
/// # Errors
///
/// Returns an error if the URL is invalid, the file cannot be created, or
/// the health check fails.
pub async fn create_pool(config: DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        connect_timeout_seconds = config.connect_timeout_seconds,
        "Creating database connection pool"
    );

    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect_with(options)
        .await?;

    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Performs a health check on the database connection
///
/// Executes a trivial query to verify the database is reachable and
/// responding.
///
/// # Errors
///
/// Returns an error if the health check query fails
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let result: (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if result.0 == 1 {
        Ok(())
    } else {
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}
