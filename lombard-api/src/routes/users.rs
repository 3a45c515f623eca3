/// User resource endpoints
///
/// # Endpoints
///
/// - `GET /v1/users` - list every user
/// - `GET /v1/users/:id` - fetch one user
/// - `POST /v1/users` - create a user
///
/// Responses serialize [`UserResponse`], a stripped view of the account:
/// the password hash and federated identity never leave the server.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    validate::{is_valid_email, non_blank},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use lombard_shared::auth::password;
use lombard_shared::models::user::{CreateUser, User};
use serde::{Deserialize, Serialize};

/// Credential-free view of a user account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            address: user.address,
            created_at: user.created_at,
        }
    }
}

/// Create user request
///
/// Every field is optional at the serde layer; presence is validated in the
/// handler so a missing field yields the API's own 400 response.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Optional: accounts created by the back office may carry no login
    pub password: Option<String>,
}

/// Create user response
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    #[serde(flatten)]
    pub user: UserResponse,

    /// Human-readable confirmation
    pub message: String,
}

/// List every user
///
/// # Endpoint
///
/// ```text
/// GET /v1/users
/// ```
///
/// Returns a JSON array, `[]` on a fresh store.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = User::list_all(&state.db).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user by id
///
/// # Errors
///
/// - `404 Not Found`: no such user
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(UserResponse::from(user)))
}

/// Create a user
///
/// # Endpoint
///
/// ```text
/// POST /v1/users
/// Content-Type: application/json
///
/// {
///   "name": "Asha Rao",
///   "email": "asha@example.com",
///   "phone": "555-0100",
///   "address": "12 Mint Street",
///   "password": "optional-login-password"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing field, bad email shape, or short password
/// - `409 Conflict`: email already exists
/// - `500 Internal Server Error`: storage failure
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<CreateUserResponse>)> {
    // Validate required fields
    let (Some(name), Some(email), Some(phone), Some(address)) = (
        non_blank(&req.name),
        non_blank(&req.email),
        non_blank(&req.phone),
        non_blank(&req.address),
    ) else {
        return Err(ApiError::BadRequest(
            "All fields (name, email, phone, address) are required".to_string(),
        ));
    };

    // Validate email format
    if !is_valid_email(email) {
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    // Hash the password when one was supplied; the plaintext is never
    // stored and never echoed back. Passwords are not trimmed.
    let password_hash = match req.password.as_deref().filter(|p| !p.is_empty()) {
        Some(plain) if plain.len() < 8 => {
            return Err(ApiError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        Some(plain) => Some(password::hash_password(plain)?),
        None => None,
    };

    let user = User::create(
        &state.db,
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
            phone: Some(phone.to_string()),
            address: Some(address.to_string()),
            external_id: None,
        },
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateUserResponse {
            user: UserResponse::from(user),
            message: "User created successfully".to_string(),
        }),
    ))
}
