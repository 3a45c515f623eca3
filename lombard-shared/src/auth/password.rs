/// Password hashing using Argon2id
///
/// Plaintext passwords are hashed before they reach storage and are never
/// persisted or returned by the API. The PHC string output embeds the
/// algorithm, parameters, and salt, so verification needs no side channel.
///
/// # Parameters
///
/// - **Algorithm**: Argon2id
/// - **Memory**: 19 MB (19456 KB)
/// - **Iterations**: 2 passes
/// - **Parallelism**: 1 lane
/// - **Salt**: 16 random bytes from the OS RNG
///
/// The cost parameters are the current OWASP baseline and are tunable in
/// one place here.
///
/// # Example
///
/// ```
/// use lombard_shared::auth::password::{hash_password, verify_password};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let hash = hash_password("super_secret")?;
/// assert!(verify_password("super_secret", &hash)?);
/// assert!(!verify_password("not_the_password", &hash)?);
/// # Ok(())
/// # }
/// ```

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, ParamsBuilder, Version,
};

/// Error type for password hashing operations
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    /// Failed to hash password
    #[error("Failed to hash password: {0}")]
    HashError(String),

    /// Failed to verify password
    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    /// Invalid password hash format
    #[error("Invalid password hash format: {0}")]
    InvalidHash(String),
}

/// Hashes a password with a fresh random salt
///
/// Returns a PHC string such as
/// `$argon2id$v=19$m=19456,t=2,p=1$...$...`.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if parameter construction or hashing
/// fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let params = ParamsBuilder::new()
        .m_cost(19456)
        .t_cost(2)
        .p_cost(1)
        .output_len(32)
        .build()
        .map_err(|e| PasswordError::HashError(format!("Invalid parameters: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::HashError(format!("Hash generation failed: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verifies a password against a stored hash
///
/// Comparison is constant-time. A wrong password is `Ok(false)`, not an
/// error; errors mean the stored hash could not be parsed or verification
/// itself failed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| PasswordError::InvalidHash(format!("Failed to parse hash: {}", e)))?;

    // Parameters are embedded in the hash itself
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(format!(
            "Verification failed: {}",
            e
        ))),
    }
}
