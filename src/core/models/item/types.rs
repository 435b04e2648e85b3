//! Owned item types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An item owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Server-assigned identifier
    pub id: i32,
    /// Title, never empty
    pub title: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Owning user id; fixed at creation
    pub owner_id: i32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Item creation input; the owner comes from the principal, never the client
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub description: Option<String>,
}

/// Partial item update; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ItemUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Which items a listing may see
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemScope {
    /// Every item in the store
    All,
    /// Only items owned by the given user id
    OwnedBy(i32),
}
