/// Database layer for Lombard
///
/// This module provides the SQLite connection pool and the migration runner.
///
/// # Modules
///
/// - `pool`: connection pool construction with foreign-key enforcement
/// - `migrations`: schema migration runner backed by `sqlx::migrate!`
///
/// Models live in the `models` module at the crate root.

pub mod migrations;
pub mod pool;
