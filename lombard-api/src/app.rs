/// Application state and router builder
///
/// This module defines the shared application state and builds the Axum
/// router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use lombard_api::{app::{build_router, AppState}, config::Config};
/// use lombard_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = create_pool(DatabaseConfig {
///     url: config.database.url.clone(),
///     max_connections: config.database.max_connections,
///     ..Default::default()
/// })
/// .await?;
/// let app = build_router(AppState::new(pool, config));
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned into each handler via Axum's `State` extractor; the pool and the
/// config are both cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                        # liveness probe (public)
/// └── /v1/
///     ├── /auth/
///     │   ├── POST /login
///     │   └── POST /federated
///     ├── /users/
///     │   ├── GET  /
///     │   ├── GET  /:id
///     │   └── POST /
///     ├── /tasks/
///     │   ├── GET    /
///     │   ├── GET    /:id
///     │   ├── GET    /user/:user_id
///     │   ├── POST   /
///     │   ├── DELETE /:id
///     │   └── PATCH  /:id/complete
///     └── /loans/
///         ├── GET  /
///         ├── GET  /:id
///         ├── POST /
///         ├── GET  /:id/payments
///         └── POST /:id/payments
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health));

    let auth_routes = Router::new()
        .route("/login", post(routes::auth::login))
        .route("/federated", post(routes::auth::federated));

    let user_routes = Router::new()
        .route("/", get(routes::users::list_users))
        .route("/", post(routes::users::create_user))
        .route("/:id", get(routes::users::get_user));

    let task_routes = Router::new()
        .route("/", get(routes::tasks::list_tasks))
        .route("/", post(routes::tasks::create_task))
        .route("/:id", get(routes::tasks::get_task))
        .route("/:id", delete(routes::tasks::delete_task))
        .route("/:id/complete", patch(routes::tasks::complete_task))
        .route("/user/:user_id", get(routes::tasks::list_tasks_by_user));

    let loan_routes = Router::new()
        .route("/", get(routes::loans::list_loans))
        .route("/", post(routes::loans::create_loan))
        .route("/:id", get(routes::loans::get_loan))
        .route("/:id/payments", get(routes::loans::list_payments))
        .route("/:id/payments", post(routes::loans::create_payment));

    let v1_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/tasks", task_routes)
        .nest("/loans", loan_routes);

    Router::new()
        .merge(health_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
