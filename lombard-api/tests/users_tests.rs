/// Integration tests for the user resource

mod common;

use axum::http::StatusCode;
use common::{create_user, send, test_app};
use serde_json::json;

#[tokio::test]
async fn test_list_users_empty_on_fresh_store() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/v1/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/v1/users",
        Some(json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "phone": "555-0100",
            "address": "12 Mint Street",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["message"], "User created successfully");
    assert_eq!(created["name"], "Asha Rao");
    assert_eq!(created["email"], "asha@example.com");

    let id = created["id"].as_i64().expect("id should be present");

    let (status, fetched) = send(&app, "GET", &format!("/v1/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Asha Rao");
    assert_eq!(fetched["email"], "asha@example.com");
    assert_eq!(fetched["phone"], "555-0100");
    assert_eq!(fetched["address"], "12 Mint Street");

    let (status, listed) = send(&app, "GET", "/v1/users", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(|a| a.len()), Some(1));
}

#[tokio::test]
async fn test_get_missing_user_is_404() {
    let app = test_app().await;

    let (status, body) = send(&app, "GET", "/v1/users/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let app = test_app().await;

    for body in [
        json!({}),
        json!({ "name": "No Email", "phone": "1", "address": "2" }),
        json!({ "name": "", "email": "a@b.com", "phone": "1", "address": "2" }),
        json!({ "email": "a@b.com" }),
    ] {
        let (status, response) = send(&app, "POST", "/v1/users", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            response["error"],
            "All fields (name, email, phone, address) are required"
        );
    }
}

#[tokio::test]
async fn test_create_rejects_bad_email() {
    let app = test_app().await;

    for email in ["not-an-email", "user@nodot", "a b@c.com", "@c.com"] {
        let (status, response) = send(
            &app,
            "POST",
            "/v1/users",
            Some(json!({
                "name": "X",
                "email": email,
                "phone": "555",
                "address": "Somewhere",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "accepted: {}", email);
        assert_eq!(response["error"], "Invalid email format");
    }
}

#[tokio::test]
async fn test_duplicate_email_conflicts_and_first_survives() {
    let app = test_app().await;

    let first_id = create_user(&app, "First", "dup@example.com", None).await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/users",
        Some(json!({
            "name": "Second",
            "email": "dup@example.com",
            "phone": "555-0101",
            "address": "Elsewhere",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Email already exists");

    // First account is still retrievable
    let (status, fetched) = send(&app, "GET", &format!("/v1/users/{}", first_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "First");
}

#[tokio::test]
async fn test_create_rejects_short_password() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/v1/users",
        Some(json!({
            "name": "X",
            "email": "short@example.com",
            "phone": "555",
            "address": "Somewhere",
            "password": "short",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Password must be at least 8 characters");
}

#[tokio::test]
async fn test_responses_never_carry_credential_material() {
    let app = test_app().await;

    let (_, created) = send(
        &app,
        "POST",
        "/v1/users",
        Some(json!({
            "name": "Secret Keeper",
            "email": "secret@example.com",
            "phone": "555",
            "address": "Somewhere",
            "password": "a-long-password",
        })),
    )
    .await;

    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let id = created["id"].as_i64().expect("id should be present");
    let (_, fetched) = send(&app, "GET", &format!("/v1/users/{}", id), None).await;
    assert!(fetched.get("password").is_none());
    assert!(fetched.get("password_hash").is_none());

    let (_, listed) = send(&app, "GET", "/v1/users", None).await;
    let rows = listed.as_array().expect("list should be an array");
    for row in rows {
        assert!(row.get("password").is_none());
        assert!(row.get("password_hash").is_none());
    }
}
