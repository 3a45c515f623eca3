/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: liveness probe
/// - `auth`: authentication endpoints (login, federated upsert)
/// - `users`: user resource
/// - `tasks`: task resource
/// - `loans`: loan and payment resources

pub mod auth;
pub mod health;
pub mod loans;
pub mod tasks;
pub mod users;
