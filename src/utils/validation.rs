//! Input validation rules

use crate::utils::error::{AppError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").ok());

/// Longest accepted username
pub const MAX_USERNAME_LEN: usize = 50;
/// Longest accepted password
pub const MAX_PASSWORD_LEN: usize = 128;

/// Validate an email address (`local@domain.tld`)
pub fn validate_email(email: &str) -> Result<()> {
    let regex = EMAIL_REGEX
        .as_ref()
        .ok_or_else(|| AppError::internal("Email regex failed to compile"))?;

    if !regex.is_match(email) {
        return Err(AppError::validation("value is not a valid email address"));
    }
    Ok(())
}

/// Validate a username
///
/// Usernames may not contain `@`, so a login string is never ambiguous
/// between the username and email namespaces.
pub fn validate_username(username: &str) -> Result<()> {
    if username.trim().is_empty() {
        return Err(AppError::validation("Username cannot be empty"));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(AppError::validation(format!(
            "Username cannot exceed {} characters",
            MAX_USERNAME_LEN
        )));
    }

    if username.contains('@') {
        return Err(AppError::validation("Username cannot contain '@'"));
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(AppError::validation("Password cannot be empty"));
    }

    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password cannot exceed {} characters",
            MAX_PASSWORD_LEN
        )));
    }

    Ok(())
}

/// Validate an item title
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(AppError::validation("Title cannot be empty"));
    }
    Ok(())
}
