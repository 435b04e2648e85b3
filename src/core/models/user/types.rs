//! Core user types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: i32,
    /// Email address (unique)
    pub email: String,
    /// Username (unique)
    pub username: String,
    /// Argon2 password hash
    #[serde(skip_serializing, default)]
    pub hashed_password: String,
    /// Whether the account may authenticate
    pub is_active: bool,
    /// Elevated role flag, bypasses ownership checks
    pub is_superuser: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether this user owns the given resource owner id
    pub fn owns(&self, owner_id: i32) -> bool {
        self.id == owner_id
    }
}

/// Registration input, password still in plaintext
#[derive(Debug, Clone)]
pub struct UserCreate {
    /// Email address
    pub email: String,
    /// Username
    pub username: String,
    /// Plaintext password
    pub password: String,
    /// Initial active flag
    pub is_active: bool,
    /// Requested superuser flag
    pub is_superuser: bool,
}

/// A user ready to be persisted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
}

/// Self-service partial update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
    /// New email address
    pub email: Option<String>,
    /// New username
    pub username: Option<String>,
    /// New plaintext password, re-hashed before storage
    pub password: Option<String>,
}

impl UserUpdate {
    /// True when no field was supplied
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.username.is_none() && self.password.is_none()
    }
}

/// Column changes applied by the store for a [`UserUpdate`]
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub email: Option<String>,
    pub username: Option<String>,
    pub hashed_password: Option<String>,
}
