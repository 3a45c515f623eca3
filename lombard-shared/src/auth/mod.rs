/// Authentication utilities
///
/// This module provides the security-sensitive primitives of the API:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and verification
/// - [`jwt`]: signed, time-limited bearer token issuance
///
/// # Security Notes
///
/// - Passwords are stored only as salted Argon2id hashes
/// - Verification uses constant-time comparison
/// - Tokens are HS256-signed and expire after 24 hours
/// - Neither plaintext passwords nor stored hashes ever appear in a token
///   or an API response
///
/// # Example
///
/// ```no_run
/// use lombard_shared::auth::jwt::{create_token, Claims};
/// use lombard_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("user_password")?;
/// assert!(verify_password("user_password", &hash)?);
///
/// let claims = Claims::new(42, "asha@example.com");
/// let token = create_token(&claims, "secret-key-at-least-32-bytes-long!")?;
/// # Ok(())
/// # }
/// ```

pub mod jwt;
pub mod password;
