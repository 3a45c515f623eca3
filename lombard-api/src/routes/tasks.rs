/// Task resource endpoints
///
/// # Endpoints
///
/// - `GET /v1/tasks` - list every task
/// - `GET /v1/tasks/:id` - fetch one task
/// - `GET /v1/tasks/user/:user_id` - list one user's tasks
/// - `POST /v1/tasks` - create a task
/// - `DELETE /v1/tasks/:id` - delete a task
/// - `PATCH /v1/tasks/:id/complete` - mark a task completed
///
/// The two list endpoints deliberately disagree about emptiness: the bulk
/// list returns `[]`, while the per-user list treats zero rows as 404.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validate::non_blank,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use lombard_shared::models::task::{CreateTask, Task, TaskStatus};
use lombard_shared::models::user::User;
use serde::{Deserialize, Serialize};

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub user_id: Option<i64>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Create task response
#[derive(Debug, Serialize)]
pub struct CreateTaskResponse {
    #[serde(flatten)]
    pub task: Task,

    pub message: String,
}

/// Plain acknowledgment body for delete/complete
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List every task, `[]` when there are none
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(Task::list_all(&state.db).await?))
}

/// Fetch one task by id
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(task))
}

/// List one user's tasks
///
/// # Errors
///
/// - `404 Not Found`: the user has no tasks. Unlike the bulk list, zero
///   rows here is an error, not an empty array.
pub async fn list_tasks_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_by_user(&state.db, user_id).await?;

    if tasks.is_empty() {
        return Err(ApiError::NotFound(
            "No tasks found for this user".to_string(),
        ));
    }

    Ok(Json(tasks))
}

/// Create a task
///
/// The owner is checked for existence before the insert. The check and the
/// insert are two separate statements, not a transaction; a concurrent
/// owner delete between them is an accepted race, with the declared
/// foreign key as the storage-level backstop.
///
/// # Errors
///
/// - `400 Bad Request`: missing field or unrecognized status
/// - `404 Not Found`: owner does not exist
/// - `500 Internal Server Error`: the existence check itself failed
pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<CreateTaskResponse>)> {
    let (Some(user_id), Some(description), Some(status)) = (
        req.user_id,
        non_blank(&req.description),
        non_blank(&req.status),
    ) else {
        return Err(ApiError::BadRequest(
            "All fields (user_id, description, status) are required".to_string(),
        ));
    };

    let Some(status) = TaskStatus::parse(status) else {
        return Err(ApiError::BadRequest(
            "Status must be one of: active, completed".to_string(),
        ));
    };

    // Check the owner exists before inserting
    let owner = User::find_by_id(&state.db, user_id)
        .await
        .map_err(|e| ApiError::Internal(format!("Database error while checking user: {}", e)))?;

    if owner.is_none() {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let task = Task::create(
        &state.db,
        CreateTask {
            user_id,
            description: description.to_string(),
            status,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTaskResponse {
            task,
            message: "Task created successfully".to_string(),
        }),
    ))
}

/// Delete a task
///
/// # Errors
///
/// - `404 Not Found`: the id did not match any row
pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = Task::delete(&state.db, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

/// Mark a task completed
///
/// Completion is unconditional: the current status is not part of the
/// match, so completing an already completed task succeeds again. Only an
/// id that matches no row at all is a 404.
pub async fn complete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let affected = Task::complete(&state.db, id).await?;

    if affected == 0 {
        return Err(ApiError::NotFound("Task not found".to_string()));
    }

    Ok(Json(MessageResponse {
        message: "Task marked as completed".to_string(),
    }))
}
