/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /v1/auth/login` - password login, returns a bearer token
/// - `POST /v1/auth/federated` - federated-identity upsert, returns a
///   bearer token
///
/// Both return the credential-stripped [`UserResponse`] next to the token;
/// neither the password hash nor the raw password ever appears in a
/// response or inside the token.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::users::UserResponse,
    validate::{is_valid_email, non_blank},
};
use axum::{extract::State, http::StatusCode, Json};
use lombard_shared::auth::jwt::{create_token, Claims};
use lombard_shared::auth::password::verify_password;
use lombard_shared::models::user::{CreateUser, User};
use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Federated sign-in request
#[derive(Debug, Deserialize)]
pub struct FederatedRequest {
    pub external_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response for both login and federated sign-in
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// HS256 bearer token, 24-hour expiry
    pub token: String,

    /// The authenticated account, credentials stripped
    pub user: UserResponse,
}

/// Password login
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/login
/// Content-Type: application/json
///
/// { "email": "asha@example.com", "password": "..." }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing email or password
/// - `401 Unauthorized`: unknown email, federated-only account, or wrong
///   password - one message for all three, so responses do not reveal
///   which accounts exist
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    // Passwords are deliberately not trimmed; only presence is checked
    let password = req.password.as_deref().filter(|p| !p.is_empty());
    let (Some(email), Some(plain)) = (non_blank(&req.email), password) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    // Find user by email
    let user = User::find_by_email(&state.db, email)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    // A federated-only account has no stored credential
    let Some(hash) = user.password_hash.as_deref() else {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    };

    // Verify password
    if !verify_password(plain, hash)? {
        return Err(ApiError::Unauthorized(
            "Invalid email or password".to_string(),
        ));
    }

    let token = issue_token(&state, &user)?;

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}

/// Federated-identity upsert
///
/// Three-way branch, in precedence order:
///
/// 1. an account with this external id exists - update its name/email;
/// 2. else an account with this email exists - attach the external id;
/// 3. else create a fresh account with no password.
///
/// The external-id match always wins over the email match, so a person who
/// later signs in under the same email with a different provider identity
/// is not split into two accounts.
///
/// # Endpoint
///
/// ```text
/// POST /v1/auth/federated
/// Content-Type: application/json
///
/// { "external_id": "google-1234", "name": "Asha Rao", "email": "asha@example.com" }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: missing field or bad email shape
/// - `409 Conflict`: branch 1 email update collides with another account
pub async fn federated(
    State(state): State<AppState>,
    Json(req): Json<FederatedRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let (Some(external_id), Some(name), Some(email)) = (
        non_blank(&req.external_id),
        non_blank(&req.name),
        non_blank(&req.email),
    ) else {
        return Err(ApiError::BadRequest(
            "All fields (external_id, name, email) are required".to_string(),
        ));
    };

    if !is_valid_email(email) {
        return Err(ApiError::BadRequest("Invalid email format".to_string()));
    }

    // Branch 1: returning federated identity
    if let Some(existing) = User::find_by_external_id(&state.db, external_id).await? {
        let user = User::update_profile(&state.db, existing.id, name, email).await?;
        let token = issue_token(&state, &user)?;
        return Ok((
            StatusCode::OK,
            Json(AuthResponse {
                token,
                user: UserResponse::from(user),
            }),
        ));
    }

    // Branch 2: existing account under this email gains the identity
    if let Some(existing) = User::find_by_email(&state.db, email).await? {
        let user = User::attach_external_id(&state.db, existing.id, external_id, name).await?;
        let token = issue_token(&state, &user)?;
        return Ok((
            StatusCode::OK,
            Json(AuthResponse {
                token,
                user: UserResponse::from(user),
            }),
        ));
    }

    // Branch 3: first sign-in, fresh account without a password
    let user = User::create(
        &state.db,
        CreateUser {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: None,
            phone: None,
            address: None,
            external_id: Some(external_id.to_string()),
        },
    )
    .await?;

    let token = issue_token(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    ))
}

/// Signs a 24-hour token binding the account id and email
fn issue_token(state: &AppState, user: &User) -> ApiResult<String> {
    let claims = Claims::new(user.id, &user.email);
    Ok(create_token(&claims, state.jwt_secret())?)
}
