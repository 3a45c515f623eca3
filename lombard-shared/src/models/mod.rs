/// Database models for Lombard
///
/// This module contains all database models and their CRUD operations.
/// Every operation takes the shared `SqlitePool` explicitly and returns
/// `Result<_, sqlx::Error>`; mapping storage errors to HTTP responses is
/// the API crate's job.
///
/// # Models
///
/// - `user`: customer accounts, with optional password credential and
///   optional federated identity
/// - `task`: follow-up tasks owned by a user
/// - `loan`: gold-backed loans owned by a user
/// - `payment`: repayments against a loan

pub mod loan;
pub mod payment;
pub mod task;
pub mod user;
