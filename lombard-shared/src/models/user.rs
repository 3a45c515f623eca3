/// User model and database operations
///
/// A user is a customer account. Accounts created through the API carry a
/// password credential; accounts created through federated sign-in carry an
/// external identity instead and may have neither phone nor address.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     id            INTEGER PRIMARY KEY AUTOINCREMENT,
///     external_id   TEXT UNIQUE,
///     name          TEXT NOT NULL,
///     email         TEXT NOT NULL UNIQUE,
///     password_hash TEXT,
///     phone         TEXT,
///     address       TEXT,
///     created_at    DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use lombard_shared::models::user::{CreateUser, User};
/// # use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         name: "Asha Rao".to_string(),
///         email: "asha@example.com".to_string(),
///         password_hash: Some("$argon2id$...".to_string()),
///         phone: Some("555-0100".to_string()),
///         address: Some("12 Mint Street".to_string()),
///         external_id: None,
///     },
/// )
/// .await?;
///
/// let found = User::find_by_email(&pool, "asha@example.com").await?;
/// assert_eq!(found.map(|u| u.id), Some(user.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// User account row
///
/// The password hash is an Argon2id PHC string and must never leave the
/// server; API responses serialize a stripped view, not this struct.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Generated row id
    pub id: i64,

    /// Federated identity subject, unique when present
    pub external_id: Option<String>,

    /// Display name
    pub name: String,

    /// Email address, unique across all users
    pub email: String,

    /// Argon2id password hash; None for federated-only accounts
    pub password_hash: Option<String>,

    pub phone: Option<String>,

    pub address: Option<String>,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    /// Already-hashed credential; never pass a plaintext password here
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub external_id: Option<String>,
}

impl User {
    /// Creates a new user row
    ///
    /// # Errors
    ///
    /// Surfaces the storage error unchanged; a duplicate email arrives as a
    /// unique-constraint violation.
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (external_id, name, email, password_hash, phone, address)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, external_id, name, email, password_hash, phone, address, created_at
            "#,
        )
        .bind(data.external_id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.password_hash)
        .bind(data.phone)
        .bind(data.address)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by row id, `None` when absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, name, email, password_hash, phone, address, created_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Finds a user by email address, `None` when absent
    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, name, email, password_hash, phone, address, created_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Finds a user by federated identity, `None` when absent
    pub async fn find_by_external_id(
        pool: &SqlitePool,
        external_id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, name, email, password_hash, phone, address, created_at
            FROM users
            WHERE external_id = ?
            "#,
        )
        .bind(external_id)
        .fetch_optional(pool)
        .await
    }

    /// Lists every user row in storage order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, name, email, password_hash, phone, address, created_at
            FROM users
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Overwrites name and email for an existing federated account
    ///
    /// Used when a returning federated identity signs in again, possibly
    /// with a changed profile.
    pub async fn update_profile(
        pool: &SqlitePool,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET name = ?, email = ?
            WHERE id = ?
            RETURNING id, external_id, name, email, password_hash, phone, address, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(id)
        .fetch_one(pool)
        .await
    }

    /// Attaches a federated identity to an existing account found by email
    ///
    /// Keeps one account per person when they first registered with a
    /// password and later sign in through a provider.
    pub async fn attach_external_id(
        pool: &SqlitePool,
        id: i64,
        external_id: &str,
        name: &str,
    ) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET external_id = ?, name = ?
            WHERE id = ?
            RETURNING id, external_id, name, email, password_hash, phone, address, created_at
            "#,
        )
        .bind(external_id)
        .bind(name)
        .bind(id)
        .fetch_one(pool)
        .await
    }
}
