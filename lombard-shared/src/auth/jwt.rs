/// Bearer token issuance and validation
///
/// Tokens are HS256-signed JWTs binding the account id and email, valid for
/// 24 hours. There is a single token type; the API has no refresh flow.
///
/// # Security
///
/// - **Algorithm**: HS256 (HMAC-SHA256)
/// - **Expiration**: 24 hours
/// - **Validation**: signature, expiration, not-before, and issuer checks
/// - **Secret**: at least 32 bytes, supplied via configuration
///
/// The raw password never enters the claims, so no token can embed or
/// reveal credential material.
///
/// # Example
///
/// ```
/// use lombard_shared::auth::jwt::{create_token, validate_token, Claims};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let claims = Claims::new(42, "asha@example.com");
/// let secret = "secret-key-at-least-32-bytes-long!!!";
///
/// let token = create_token(&claims, secret)?;
/// let validated = validate_token(&token, secret)?;
/// assert_eq!(validated.sub, 42);
/// assert_eq!(validated.email, "asha@example.com");
/// # Ok(())
/// # }
/// ```

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Issuer claim stamped into every token
const ISSUER: &str = "lombard";

/// Error type for token operations
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    /// Failed to create token
    #[error("Failed to create token: {0}")]
    CreateError(String),

    /// Failed to validate token
    #[error("Failed to validate token: {0}")]
    ValidationError(String),

    /// Token has expired
    #[error("Token has expired")]
    Expired,
}

/// Token claims
///
/// Standard claims plus the account email, so a bearer identifies both the
/// row id and the address it was issued against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: account row id
    pub sub: i64,

    /// Account email at issuance time
    pub email: String,

    /// Issuer, always "lombard"
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Creates claims with the standard 24-hour expiry
    pub fn new(user_id: i64, email: &str) -> Self {
        Self::with_expiration(user_id, email, Duration::hours(24))
    }

    /// Creates claims with a custom expiry
    ///
    /// Used by tests to mint already-expired tokens.
    pub fn with_expiration(user_id: i64, email: &str, expires_in: Duration) -> Self {
        let now = Utc::now();
        let expiration = now + expires_in;

        Self {
            sub: user_id,
            email: email.to_string(),
            iss: ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            nbf: now.timestamp(),
        }
    }

    /// Checks whether the token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Signs claims into a token string
///
/// # Errors
///
/// Returns `JwtError::CreateError` if encoding fails.
pub fn create_token(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());

    encode(&header, claims, &key)
        .map_err(|e| JwtError::CreateError(format!("Token encoding failed: {}", e)))
}

/// Validates a token and extracts its claims
///
/// Verifies the signature, expiration, not-before, and issuer.
///
/// # Errors
///
/// `JwtError::Expired` for an expired signature, `JwtError::ValidationError`
/// for anything else wrong with the token.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let key = DecodingKey::from_secret(secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.validate_exp = true;
    validation.validate_nbf = true;

    let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
        _ => JwtError::ValidationError(format!("Token validation failed: {}", e)),
    })?;

    Ok(token_data.claims)
}
