//! Authentication and authorization types

use crate::core::models::User;
use thiserror::Error;

/// Credential and bearer-token failures
///
/// The display strings are returned to clients verbatim.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token on a protected route
    #[error("Not authenticated")]
    MissingToken,
    /// Bad signature, malformed token, or a token for an unknown user
    #[error("Could not validate credentials")]
    InvalidToken,
    /// Valid signature, past expiry
    #[error("Token has expired")]
    ExpiredToken,
    /// Unknown login or wrong password; both report the same message
    #[error("Incorrect username or password")]
    InvalidCredentials,
    /// The account exists but is disabled
    #[error("Inactive user")]
    InactiveUser,
}

impl AuthError {
    /// Stable machine-usable error code
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "NOT_AUTHENTICATED",
            AuthError::InvalidToken => "INVALID_TOKEN",
            AuthError::ExpiredToken => "TOKEN_EXPIRED",
            AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
            AuthError::InactiveUser => "INACTIVE_USER",
        }
    }
}

/// Authentication method carried by a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthMethod {
    /// Bearer token authentication
    Bearer(String),
    /// No authentication
    None,
}

/// Successful login: the user and the token issued for them
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Authenticated user
    pub user: User,
    /// Signed access token
    pub access_token: String,
}
