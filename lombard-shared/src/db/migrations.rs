/// Database migration runner
///
/// Migrations live in the `migrations/` directory of this crate and are
/// embedded into the binary with `sqlx::migrate!`. Each file is named
/// `{timestamp}_{name}.sql` and is applied at most once; applied versions
/// are tracked in the `_sqlx_migrations` table.
///
/// # Example
///
/// ```no_run
/// use lombard_shared::db::migrations::run_migrations;
/// use lombard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig {
///     url: "sqlite://lombard.db".to_string(),
///     ..Default::default()
/// })
/// .await?;
///
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::SqlitePool;
use tracing::{info, warn};

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration file fails to execute or the connection
/// is lost mid-migration.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
