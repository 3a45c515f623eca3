/// Task model and database operations
///
/// Tasks are free-text follow-up items owned by a user. The only mutation
/// after creation is the status transition to `completed`; the transition
/// is deliberately permissive and re-completing an already completed task
/// succeeds.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     id          INTEGER PRIMARY KEY AUTOINCREMENT,
///     user_id     INTEGER NOT NULL REFERENCES users(id),
///     description TEXT NOT NULL,
///     status      TEXT NOT NULL DEFAULT 'active',
///     created_at  DATETIME NOT NULL DEFAULT CURRENT_TIMESTAMP
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task is open
    Active,

    /// Task has been finished
    Completed,
}

impl TaskStatus {
    /// Converts status to its storage string
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Active => "active",
            TaskStatus::Completed => "completed",
        }
    }

    /// Parses a storage string, `None` for anything unrecognized
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(TaskStatus::Active),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}

/// Task row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Task {
    pub id: i64,

    /// Owning user; the owner is checked for existence before insert
    pub user_id: i64,

    /// Free-text description of the work
    pub description: String,

    pub status: TaskStatus,

    pub created_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub user_id: i64,
    pub description: String,
    pub status: TaskStatus,
}

impl Task {
    /// Creates a new task row
    ///
    /// Callers are expected to have verified the owner exists first; the
    /// declared foreign key is the storage-level backstop.
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (user_id, description, status)
            VALUES (?, ?, ?)
            RETURNING id, user_id, description, status, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.description)
        .bind(data.status)
        .fetch_one(pool)
        .await
    }

    /// Finds a task by id, `None` when absent
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, description, status, created_at
            FROM tasks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Lists every task row in storage order
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, description, status, created_at
            FROM tasks
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Lists all tasks owned by one user
    pub async fn list_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Task>(
            r#"
            SELECT id, user_id, description, status, created_at
            FROM tasks
            WHERE user_id = ?
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Deletes a task row
    ///
    /// Returns the number of rows removed; zero means the id did not exist.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Marks a task completed, whatever its current status
    ///
    /// Status is intentionally not part of the WHERE clause, so completing
    /// twice succeeds twice. Returns the number of rows touched; zero means
    /// the id did not exist.
    pub async fn complete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE tasks SET status = 'completed' WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}
