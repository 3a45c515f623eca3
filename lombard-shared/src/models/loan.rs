/// Loan model and database operations
///
/// A loan records gold items pledged by a customer, the amount advanced
/// against them, and the interest rate. Unlike tasks there is no
/// application-level owner check before insert; the declared foreign key
/// rejects an unknown customer at the storage level.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE loans (
///     id            INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id       INTEGER NOT NULL REFERENCES users(id),
///     gold_items    TEXT NOT NULL,
///     amount        REAL NOT NULL,
///     interest_rate REAL NOT NULL,
///     status        TEXT NOT NULL DEFAULT 'active',
///     created_at    DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// Loan row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Loan {
    pub id: i64,

    /// Owning customer
    pub user_id: i64,

    /// Description of the pledged gold items
    pub gold_items: String,

    /// Principal advanced; validated positive at the API layer
    pub amount: f64,

    pub interest_rate: f64,

    pub status: String,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new loan
#[derive(Debug, Clone)]
pub struct CreateLoan {
    pub user_id: i64,
    pub gold_items: String,
    pub amount: f64,
    pub interest_rate: f64,
    pub status: String,
}

impl Loan {
    /// Creates a new loan row
    ///
    /// An unknown `user_id` surfaces as a foreign-key violation from the
    /// storage layer.
    pub async fn create(pool: &SqlitePool, data: CreateLoan) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (user_id, gold_items, amount, interest_rate, status)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, gold_items, amount, interest_rate, status, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.gold_items)
        .bind(data.amount)
        .bind(data.interest_rate)
        .bind(data.status)
        .fetch_one(pool)
        .await
    }

    /// Finds a loan by id, `None` when absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, user_id, gold_items, amount, interest_rate, status, created_at
            FROM loans
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists every loan row in storage order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Loan>(
            r#"
            SELECT id, user_id, gold_items, amount, interest_rate, status, created_at
            FROM loans
            "#,
        )
        .fetch_all(pool)
        .await
    }
}
