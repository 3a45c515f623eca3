//! # Lombard Shared Library
//!
//! Shared types and business logic for the Lombard gold-loan back-office
//! API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `auth`: Password hashing and token issuance
//! - `db`: Connection pool and migration runner

pub mod auth;
pub mod db;
pub mod models;

/// Current version of the Lombard shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
