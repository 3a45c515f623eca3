//! Shared harness for API integration tests
//!
//! Builds the full router against an in-memory SQLite database and drives
//! it in-process with `tower::ServiceExt::oneshot`; no port is bound and
//! no external services are needed.

// Each test binary compiles this module separately and none uses all of it
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use lombard_api::app::{build_router, AppState};
use lombard_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use lombard_shared::db::migrations::run_migrations;
use lombard_shared::db::pool::{create_pool, DatabaseConfig as PoolConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Signing secret used by every test app
pub const TEST_JWT_SECRET: &str = "integration-test-secret-at-least-32-bytes";

/// Builds a router over a fresh in-memory database
///
/// The pool is capped at one connection: every new connection to
/// ":memory:" would otherwise open its own empty database.
pub async fn test_app() -> Router {
    let pool = create_pool(PoolConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..Default::default()
    })
    .await
    .expect("pool should be created");

    run_migrations(&pool).await.expect("migrations should apply");

    let config = Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
        },
    };

    build_router(AppState::new(pool, config))
}

/// Sends one request and returns (status, parsed JSON body)
///
/// An empty body parses as `Value::Null`.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            builder
                .body(Body::from(json.to_string()))
                .expect("request should build")
        }
        None => builder.body(Body::empty()).expect("request should build"),
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("request should complete");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should collect");

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, json)
}

/// Creates a user through the API and returns its id
pub async fn create_user(app: &Router, name: &str, email: &str, password: Option<&str>) -> i64 {
    let mut body = serde_json::json!({
        "name": name,
        "email": email,
        "phone": "555-0100",
        "address": "12 Mint Street",
    });
    if let Some(password) = password {
        body["password"] = Value::String(password.to_string());
    }

    let (status, json) = send(app, "POST", "/v1/users", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "user create failed: {}", json);

    json["id"].as_i64().expect("created user should carry an id")
}
