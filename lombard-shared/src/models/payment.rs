/// Payment model and database operations
///
/// Repayments against a loan. The payment date defaults to the insertion
/// time when the caller does not supply one.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// Payment row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Payment {
    pub id: i64,

    /// Loan this payment settles against
    pub loan_id: i64,

    pub amount: f64,

    pub payment_date: DateTime<Utc>,

    /// Free-form type, e.g. "interest", "principal", "closure"
    pub payment_type: String,
}

/// Input for creating a new payment
#[derive(Debug, Clone)]
pub struct CreatePayment {
    pub loan_id: i64,
    pub amount: f64,
    /// Defaults to the current time when `None`
    pub payment_date: Option<DateTime<Utc>>,
    pub payment_type: String,
}

impl Payment {
    /// Creates a new payment row
    ///
    /// An unknown `loan_id` surfaces as a foreign-key violation from the
    /// storage layer.
    pub async fn create(pool: &SqlitePool, data: CreatePayment) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (loan_id, amount, payment_date, payment_type)
            VALUES (?, ?, COALESCE(?, CURRENT_TIMESTAMP), ?)
            RETURNING id, loan_id, amount, payment_date, payment_type
            "#,
        )
        .bind(data.loan_id)
        .bind(data.amount)
        .bind(data.payment_date)
        .bind(data.payment_type)
        .fetch_one(pool)
        .await
    }

    /// Lists all payments recorded against one loan
    ///
    /// A loan with no payments yields an empty vector, not an error.
    pub async fn list_by_loan(pool: &SqlitePool, loan_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Payment>(
            r#"
            SELECT id, loan_id, amount, payment_date, payment_type
            FROM payments
            WHERE loan_id = ?
            "#,
        )
        .bind(loan_id)
        .fetch_all(pool)
        .await
    }
}
