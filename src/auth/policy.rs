//! Access rules for users and items
//!
//! Every rule is a pure function of the authenticated principal and the
//! target, so handlers call these before touching storage for writes.

use crate::core::models::{Item, ItemScope, User};
use crate::utils::error::{AppError, Result};

/// Stateless ownership / superuser policy
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy;

impl AccessPolicy {
    /// Items a principal may list
    pub fn item_scope(principal: &User) -> ItemScope {
        if principal.is_superuser {
            ItemScope::All
        } else {
            ItemScope::OwnedBy(principal.id)
        }
    }

    /// Reading, updating or deleting an item requires ownership or superuser
    pub fn check_item(principal: &User, item: &Item) -> Result<()> {
        if principal.is_superuser || principal.owns(item.owner_id) {
            Ok(())
        } else {
            Err(AppError::forbidden("Not enough permissions"))
        }
    }

    /// A user may always read themselves; anyone else requires superuser
    pub fn check_read_user(principal: &User, target_id: i32) -> Result<()> {
        if principal.id == target_id || principal.is_superuser {
            Ok(())
        } else {
            Err(AppError::insufficient_privileges(
                "The user doesn't have enough privileges",
            ))
        }
    }

    /// Listing all users is superuser-only
    pub fn check_list_users(principal: &User) -> Result<()> {
        if principal.is_superuser {
            Ok(())
        } else {
            Err(AppError::forbidden("Not enough permissions"))
        }
    }

    /// Creating a superuser through registration
    ///
    /// Allowed when open superuser registration is enabled, or when the
    /// caller is itself an active superuser.
    pub fn check_superuser_grant(caller: Option<&User>, allow_open: bool) -> Result<()> {
        if allow_open {
            return Ok(());
        }
        match caller {
            Some(user) if user.is_superuser && user.is_active => Ok(()),
            _ => Err(AppError::forbidden(
                "Not enough permissions to create a superuser",
            )),
        }
    }
}
