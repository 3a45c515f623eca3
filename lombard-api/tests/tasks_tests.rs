/// Integration tests for the task resource

mod common;

use axum::http::StatusCode;
use common::{create_user, send, test_app};
use serde_json::json;

#[tokio::test]
async fn test_list_tasks_empty_on_fresh_store() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/v1/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = test_app().await;

    let user_id = create_user(&app, "Asha Rao", "asha@example.com", None).await;

    let (status, created) = send(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({
            "user_id": user_id,
            "description": "Call about renewal",
            "status": "active",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "Task created successfully");
    assert_eq!(created["user_id"].as_i64(), Some(user_id));
    assert_eq!(created["status"], "active");

    let id = created["id"].as_i64().expect("id should be present");

    let (status, fetched) = send(&app, "GET", &format!("/v1/tasks/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["description"], "Call about renewal");
}

#[tokio::test]
async fn test_create_requires_all_fields() {
    let app = test_app().await;

    for body in [
        json!({}),
        json!({ "user_id": 1 }),
        json!({ "user_id": 1, "description": "x" }),
        json!({ "description": "x", "status": "active" }),
        json!({ "user_id": 1, "description": "", "status": "active" }),
    ] {
        let (status, response) = send(&app, "POST", "/v1/tasks", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response["error"],
            "All fields (user_id, description, status) are required"
        );
    }
}

#[tokio::test]
async fn test_create_rejects_unknown_status() {
    let app = test_app().await;

    let user_id = create_user(&app, "Asha Rao", "asha@example.com", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({ "user_id": user_id, "description": "x", "status": "done" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Status must be one of: active, completed");
}

#[tokio::test]
async fn test_create_with_missing_owner_inserts_nothing() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({ "user_id": 9999, "description": "Orphan", "status": "active" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    // Nothing was inserted: the per-user list still signals not-found
    let (status, _) = send(&app, "GET", "/v1/tasks/user/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, "GET", "/v1/tasks", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_per_user_list_is_404_when_empty() {
    let app = test_app().await;

    // The user exists but owns no tasks: the per-user list is still 404,
    // asymmetric with the bulk list's empty array
    let user_id = create_user(&app, "Asha Rao", "asha@example.com", None).await;

    let (status, body) = send(&app, "GET", &format!("/v1/tasks/user/{}", user_id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No tasks found for this user");

    let (status, all) = send(&app, "GET", "/v1/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn test_per_user_list_returns_owned_tasks() {
    let app = test_app().await;

    let owner = create_user(&app, "Owner", "owner@example.com", None).await;
    let other = create_user(&app, "Other", "other@example.com", None).await;

    for description in ["first", "second"] {
        let (status, _) = send(
            &app,
            "POST",
            "/v1/tasks",
            Some(json!({ "user_id": owner, "description": description, "status": "active" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, _) = send(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({ "user_id": other, "description": "unrelated", "status": "active" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, "GET", &format!("/v1/tasks/user/{}", owner), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().expect("list should be an array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|t| t["user_id"].as_i64() == Some(owner)));
}

#[tokio::test]
async fn test_complete_is_permissive_and_404_for_missing() {
    let app = test_app().await;

    let user_id = create_user(&app, "Asha Rao", "asha@example.com", None).await;
    let (_, created) = send(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({ "user_id": user_id, "description": "x", "status": "active" })),
    )
    .await;
    let id = created["id"].as_i64().expect("id should be present");

    // First completion
    let (status, body) = send(&app, "PATCH", &format!("/v1/tasks/{}/complete", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task marked as completed");

    // Second completion still succeeds: status is not part of the match
    let (status, _) = send(&app, "PATCH", &format!("/v1/tasks/{}/complete", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, fetched) = send(&app, "GET", &format!("/v1/tasks/{}", id), None).await;
    assert_eq!(fetched["status"], "completed");

    // A literally nonexistent id is the only 404
    let (status, body) = send(&app, "PATCH", "/v1/tasks/99999/complete", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let app = test_app().await;

    let user_id = create_user(&app, "Asha Rao", "asha@example.com", None).await;
    let (_, created) = send(
        &app,
        "POST",
        "/v1/tasks",
        Some(json!({ "user_id": user_id, "description": "x", "status": "active" })),
    )
    .await;
    let id = created["id"].as_i64().expect("id should be present");

    let (status, body) = send(&app, "DELETE", &format!("/v1/tasks/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted successfully");

    let (status, body) = send(&app, "GET", &format!("/v1/tasks/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Task not found");

    // Deleting again finds nothing
    let (status, _) = send(&app, "DELETE", &format!("/v1/tasks/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
