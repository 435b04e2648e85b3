use crate::core::models::{NewUser, User, UserChanges};
use crate::utils::error::{AppError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user};
use super::types::{MAX_ROWS, SeaOrmDatabase};

const EMAIL_TAKEN_ON_CREATE: &str = "The user with this email already exists in the system.";
const USERNAME_TAKEN_ON_CREATE: &str = "The username is already taken.";
const EMAIL_TAKEN_ON_UPDATE: &str = "Email already registered";
const USERNAME_TAKEN_ON_UPDATE: &str = "Username already registered";

/// Pick the conflict text for a unique violation raised by the `users` table
///
/// SQLite reports `users.username`, Postgres `users_username_key`.
pub(super) fn unique_violation_message(
    detail: &str,
    email_taken: &'static str,
    username_taken: &'static str,
) -> &'static str {
    if detail.contains("username") {
        username_taken
    } else {
        email_taken
    }
}

impl SeaOrmDatabase {
    /// Find user by ID
    pub async fn find_user_by_id(&self, user_id: i32) -> Result<Option<User>> {
        debug!("Finding user by ID: {}", user_id);

        let user_model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by username
    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        debug!("Finding user by username: {}", username);

        let user_model = entities::User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Find user by email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        debug!("Finding user by email: {}", email);

        let user_model = entities::User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(user_model.map(|model| model.to_domain_user()))
    }

    /// Create a new user
    ///
    /// Email uniqueness is checked before username uniqueness.
    pub async fn create_user(&self, new_user: &NewUser) -> Result<User> {
        debug!("Creating user: {}", new_user.username);

        if self.find_user_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::conflict(EMAIL_TAKEN_ON_CREATE));
        }
        if self.find_user_by_username(&new_user.username).await?.is_some() {
            return Err(AppError::conflict(USERNAME_TAKEN_ON_CREATE));
        }

        let model = user::Model::from_new_user(new_user)
            .insert(&self.db)
            .await
            .map_err(|e| {
                AppError::from_write_error(e, |detail| {
                    unique_violation_message(detail, EMAIL_TAKEN_ON_CREATE, USERNAME_TAKEN_ON_CREATE)
                })
            })?;

        Ok(model.to_domain_user())
    }

    /// Apply partial changes to a user
    ///
    /// A new email or username must not belong to any other user.
    pub async fn update_user(&self, user_id: i32, changes: &UserChanges) -> Result<User> {
        debug!("Updating user: {}", user_id);

        let model = entities::User::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| {
                AppError::not_found("The user with this id does not exist in the system")
            })?;

        if let Some(email) = &changes.email {
            if let Some(other) = self.find_user_by_email(email).await? {
                if other.id != user_id {
                    return Err(AppError::conflict(EMAIL_TAKEN_ON_UPDATE));
                }
            }
        }
        if let Some(username) = &changes.username {
            if let Some(other) = self.find_user_by_username(username).await? {
                if other.id != user_id {
                    return Err(AppError::conflict(USERNAME_TAKEN_ON_UPDATE));
                }
            }
        }

        let mut active_model: user::ActiveModel = model.into();
        if let Some(email) = &changes.email {
            active_model.email = Set(email.clone());
        }
        if let Some(username) = &changes.username {
            active_model.username = Set(username.clone());
        }
        if let Some(hashed_password) = &changes.hashed_password {
            active_model.hashed_password = Set(hashed_password.clone());
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(|e| {
                AppError::from_write_error(e, |detail| {
                    unique_violation_message(detail, EMAIL_TAKEN_ON_UPDATE, USERNAME_TAKEN_ON_UPDATE)
                })
            })?;

        Ok(updated.to_domain_user())
    }

    /// List users in insertion order
    pub async fn list_users(&self, skip: u64, limit: u64) -> Result<Vec<User>> {
        debug!("Listing users: skip={}, limit={}", skip, limit);

        let models = entities::User::find()
            .order_by_asc(user::Column::Id)
            .offset(skip.min(MAX_ROWS))
            .limit(limit.min(MAX_ROWS))
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_user()).collect())
    }

    /// Count all users
    pub async fn count_users(&self) -> Result<u64> {
        entities::User::find()
            .count(&self.db)
            .await
            .map_err(AppError::Database)
    }
}
