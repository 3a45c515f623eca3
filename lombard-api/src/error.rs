/// Error handling for the API server
///
/// A unified error type that maps to HTTP responses. Handlers return
/// `Result<T, ApiError>`; conversion to a status code and JSON body is
/// automatic via `IntoResponse`.
///
/// The wire shape is `{"error": "<message>"}`. Internal failure detail is
/// logged server-side and never leaks to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed input (400)
    BadRequest(String),

    /// Bad credentials (401)
    Unauthorized(String),

    /// Missing row or entity (404)
    NotFound(String),

    /// Uniqueness or foreign-key violation surfaced from storage (409)
    Conflict(String),

    /// Storage failure or any other unexpected fault (500)
    Internal(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                // Log the detail, return a generic message
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// Constraint violations become conflicts; a missing row becomes 404;
/// everything else is an internal fault.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() {
                    ApiError::Conflict("Email already exists".to_string())
                } else if db_err.is_foreign_key_violation() {
                    ApiError::Conflict("Referenced record does not exist".to_string())
                } else {
                    ApiError::Internal(format!("Database error: {}", db_err))
                }
            }
            _ => ApiError::Internal(format!("Database error: {}", err)),
        }
    }
}

/// Convert password errors to API errors
impl From<lombard_shared::auth::password::PasswordError> for ApiError {
    fn from(err: lombard_shared::auth::password::PasswordError) -> Self {
        ApiError::Internal(format!("Password operation failed: {}", err))
    }
}

/// Convert JWT errors to API errors
impl From<lombard_shared::auth::jwt::JwtError> for ApiError {
    fn from(err: lombard_shared::auth::jwt::JwtError) -> Self {
        match err {
            lombard_shared::auth::jwt::JwtError::Expired => {
                ApiError::Unauthorized("Token expired".to_string())
            }
            lombard_shared::auth::jwt::JwtError::ValidationError(msg) => {
                ApiError::Unauthorized(msg)
            }
            lombard_shared::auth::jwt::JwtError::CreateError(msg) => {
                ApiError::Internal(format!("Token creation failed: {}", msg))
            }
        }
    }
}
