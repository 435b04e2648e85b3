//! Error types for the service

use crate::auth::AuthError;
use thiserror::Error;

/// Result type alias for the service
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for the service
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Credential and token errors
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Token signing errors
    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Password hashing errors
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// Malformed or missing input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Uniqueness violations
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing resources
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authenticated but not allowed
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Authenticated but lacking the superuser role on a user lookup
    #[error("Insufficient privileges: {0}")]
    InsufficientPrivileges(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Listener startup and runtime failures
    #[error("Server error: {0}")]
    Server(String),
}
