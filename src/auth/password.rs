//! Password hashing and verification using Argon2

use crate::utils::error::{AppError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use once_cell::sync::Lazy;
use tracing::error;

/// Hash verified against when a login names an unknown user, so that the
/// unknown-user path costs the same as a wrong password.
static DUMMY_HASH: Lazy<Option<String>> = Lazy::new(|| match hash_password("dummy-password") {
    Ok(hash) => Some(hash),
    Err(e) => {
        error!("Failed to prepare dummy password hash: {}", e);
        None
    }
});

/// Hash a password using Argon2 with a fresh random salt
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::crypto(format!("Failed to hash password: {}", e)))?;

    Ok(password_hash.to_string())
}

/// Verify a password against its hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::crypto(format!("Failed to parse password hash: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AppError::crypto(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

/// Burn one verification against the dummy hash; the result is always `false`
pub fn verify_against_dummy(password: &str) -> bool {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
    false
}
