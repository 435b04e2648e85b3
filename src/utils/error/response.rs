//! HTTP response handling for errors

use super::types::AppError;
use crate::auth::AuthError;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

impl AppError {
    /// Status code, stable error code and client-facing message
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Auth(auth_error) => {
                let status = match auth_error {
                    AuthError::InvalidCredentials | AuthError::InactiveUser => {
                        StatusCode::BAD_REQUEST
                    }
                    AuthError::MissingToken
                    | AuthError::InvalidToken
                    | AuthError::ExpiredToken => StatusCode::UNAUTHORIZED,
                };
                (status, auth_error.code(), auth_error.to_string())
            }
            AppError::Validation(message) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "VALIDATION_ERROR",
                message.clone(),
            ),
            AppError::Conflict(message) => (StatusCode::BAD_REQUEST, "CONFLICT", message.clone()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, "NOT_FOUND", message.clone()),
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, "FORBIDDEN", message.clone()),
            AppError::InsufficientPrivileges(message) => (
                StatusCode::BAD_REQUEST,
                "INSUFFICIENT_PRIVILEGES",
                message.clone(),
            ),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", message.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        }
    }

    /// Stable machine-usable error code
    pub fn code(&self) -> &'static str {
        self.parts().1
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.parts().0
    }

    fn error_response(&self) -> HttpResponse {
        if self.is_internal() {
            error!("Request failed: {}", self);
        }

        let (status_code, error_code, message) = self.parts();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        let mut builder = HttpResponse::build(status_code);
        if status_code == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }
        builder.json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
