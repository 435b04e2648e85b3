//! Request and response bodies for user endpoints

use crate::core::models::{UserCreate, UserUpdate};
use crate::utils::error::Result;
use crate::utils::validation::{validate_email, validate_password, validate_username};
use serde::{Deserialize, Serialize};

/// Registration body
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

fn default_is_active() -> bool {
    true
}

impl RegisterRequest {
    /// Validate fields and convert into the domain create request
    pub fn into_user_create(self) -> Result<UserCreate> {
        validate_email(&self.email)?;
        validate_username(&self.username)?;
        validate_password(&self.password)?;

        Ok(UserCreate {
            email: self.email,
            username: self.username,
            password: self.password,
            is_active: self.is_active,
            is_superuser: self.is_superuser,
        })
    }
}

/// Password-grant login form
///
/// `username` accepts either a username or an email address. Extra OAuth2
/// form fields (`grant_type`, `scope`, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Issued access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Self-service profile update; absent fields stay unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMeRequest {
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl UpdateMeRequest {
    /// Validate supplied fields and convert into the domain update
    pub fn into_user_update(self) -> Result<UserUpdate> {
        if let Some(ref email) = self.email {
            validate_email(email)?;
        }
        if let Some(ref username) = self.username {
            validate_username(username)?;
        }
        if let Some(ref password) = self.password {
            validate_password(password)?;
        }

        Ok(UserUpdate {
            email: self.email,
            username: self.username,
            password: self.password,
        })
    }
}
