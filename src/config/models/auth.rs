//! Authentication configuration

use super::*;
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};

/// Shortest accepted token lifetime: 5 minutes
const MIN_TOKEN_MINUTES: u64 = 5;
/// Longest accepted token lifetime: 30 days
const MAX_TOKEN_MINUTES: u64 = 60 * 24 * 30;

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token signing secret
    #[serde(default = "generate_secure_secret")]
    pub secret_key: String,
    /// Access token lifetime in minutes
    #[serde(default = "default_access_token_expire_minutes")]
    pub access_token_expire_minutes: u64,
    /// `iss` claim stamped on and required of every token
    #[serde(default = "default_token_issuer")]
    pub token_issuer: String,
    /// Let anonymous registrations request the superuser flag
    #[serde(default)]
    pub allow_open_superuser_registration: bool,
    /// Superuser created at start-up if absent
    #[serde(default)]
    pub first_superuser: Option<FirstSuperuserConfig>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret_key: generate_secure_secret(),
            access_token_expire_minutes: default_access_token_expire_minutes(),
            token_issuer: default_token_issuer(),
            allow_open_superuser_registration: false,
            first_superuser: None,
        }
    }
}

impl AuthConfig {
    /// Token lifetime in seconds
    pub fn token_ttl_seconds(&self) -> i64 {
        i64::try_from(self.access_token_expire_minutes.saturating_mul(60)).unwrap_or(i64::MAX)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.secret_key.len() < 32 {
            return Err("Secret key must be at least 32 characters long for security".to_string());
        }

        if self.secret_key == "your-secret-key" || self.secret_key == "change-me" {
            return Err(
                "Secret key must not use default values. Please generate a secure random secret."
                    .to_string(),
            );
        }

        if self.access_token_expire_minutes < MIN_TOKEN_MINUTES {
            return Err("Token lifetime should be at least 5 minutes".to_string());
        }

        if self.access_token_expire_minutes > MAX_TOKEN_MINUTES {
            return Err("Token lifetime should not exceed 30 days for security reasons".to_string());
        }

        if self.token_issuer.is_empty() {
            return Err("Token issuer cannot be empty".to_string());
        }

        if let Some(first) = &self.first_superuser {
            first.validate()?;
        }

        Ok(())
    }
}

/// Credentials of the superuser created at start-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirstSuperuserConfig {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl FirstSuperuserConfig {
    /// Validate the bootstrap credentials with the same rules as registration
    pub fn validate(&self) -> Result<(), String> {
        use crate::utils::validation;

        validation::validate_email(&self.email).map_err(|e| format!("First superuser: {}", e))?;
        validation::validate_username(&self.username)
            .map_err(|e| format!("First superuser: {}", e))?;
        validation::validate_password(&self.password)
            .map_err(|e| format!("First superuser: {}", e))?;
        Ok(())
    }
}

/// Generate a secure random signing secret
fn generate_secure_secret() -> String {
    // Generate a 64-character secure random string
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect()
}
