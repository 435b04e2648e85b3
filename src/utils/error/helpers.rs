//! Helper functions for creating specific error types

use super::types::AppError;
use sea_orm::{DbErr, SqlErr};

impl AppError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn crypto<S: Into<String>>(message: S) -> Self {
        Self::Crypto(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn forbidden<S: Into<String>>(message: S) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn insufficient_privileges<S: Into<String>>(message: S) -> Self {
        Self::InsufficientPrivileges(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server(message.into())
    }

    /// Map a write failure, turning a unique-constraint violation into `Conflict`
    ///
    /// The application checks uniqueness before writing; this covers the race
    /// where two requests pass the check concurrently. `conflict_message`
    /// receives the driver's violation detail.
    pub fn from_write_error<F, S>(err: DbErr, conflict_message: F) -> Self
    where
        F: FnOnce(&str) -> S,
        S: Into<String>,
    {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::Conflict(conflict_message(&detail).into())
            }
            _ => Self::Database(err),
        }
    }

    /// Whether the error is an internal failure that must not reach clients verbatim
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Database(_)
                | Self::Serialization(_)
                | Self::Yaml(_)
                | Self::Io(_)
                | Self::Jwt(_)
                | Self::Crypto(_)
                | Self::Internal(_)
                | Self::Server(_)
        )
    }
}
