//! Core authentication system implementation

use super::jwt::JwtHandler;
use super::password;
use super::policy::AccessPolicy;
use super::types::{AuthError, LoginResult};
use crate::config::AuthConfig;
use crate::core::models::{NewUser, User, UserChanges, UserCreate, UserUpdate};
use crate::storage::StorageLayer;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main authentication system
///
/// Holds the process-wide signing secret (through the JWT handler) and the
/// store used for live principal lookups. Cheap to clone.
#[derive(Clone)]
pub struct AuthSystem {
    /// Authentication configuration
    config: Arc<AuthConfig>,
    /// Storage layer for user data
    storage: Arc<StorageLayer>,
    /// JWT handler
    jwt: Arc<JwtHandler>,
}

impl AuthSystem {
    /// Create a new authentication system
    pub fn new(config: &AuthConfig, storage: Arc<StorageLayer>) -> Self {
        info!("Initializing authentication system");

        let config = Arc::new(config.clone());
        let jwt = Arc::new(JwtHandler::new(&config));

        Self {
            config,
            storage,
            jwt,
        }
    }

    /// Issue an access token for a user id
    pub fn issue_token(&self, user_id: i32) -> Result<String> {
        self.jwt.create_access_token(user_id)
    }

    /// Verify a token and return the user id it names
    pub fn parse_token(&self, token: &str) -> std::result::Result<i32, AuthError> {
        self.jwt.user_id_from_token(token)
    }

    /// Resolve a bearer token to a live, active user
    pub async fn authenticate(&self, token: &str) -> Result<User> {
        let user_id = self.parse_token(token)?;

        let user = self
            .storage
            .db()
            .find_user_by_id(user_id)
            .await?
            .ok_or_else(|| {
                warn!("Token names unknown user: {}", user_id);
                AuthError::InvalidToken
            })?;

        if !user.is_active {
            warn!("Token presented for inactive user: {}", user_id);
            return Err(AuthError::InactiveUser.into());
        }

        debug!("Authenticated user: {}", user.id);
        Ok(user)
    }

    /// Check a username-or-email and password, issuing a token on success
    ///
    /// Unknown logins and wrong passwords fail identically.
    pub async fn login(&self, username_or_email: &str, password: &str) -> Result<LoginResult> {
        info!("User login attempt: {}", username_or_email);

        let db = self.storage.db();
        let user = match db.find_user_by_username(username_or_email).await? {
            Some(user) => Some(user),
            None => db.find_user_by_email(username_or_email).await?,
        };

        let Some(user) = user else {
            password::verify_against_dummy(password);
            warn!("Login failed for unknown account");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(password, &user.hashed_password)? {
            warn!("Login failed for user: {}", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            warn!("Login refused for inactive user: {}", user.id);
            return Err(AuthError::InactiveUser.into());
        }

        let access_token = self.issue_token(user.id)?;

        info!("User logged in successfully: {}", user.id);
        Ok(LoginResult { user, access_token })
    }

    /// Register a new account
    ///
    /// `caller` is the optional authenticated principal of the request and
    /// only matters when a superuser flag is requested.
    pub async fn register(&self, input: UserCreate, caller: Option<&User>) -> Result<User> {
        if input.is_superuser {
            AccessPolicy::check_superuser_grant(
                caller,
                self.config.allow_open_superuser_registration,
            )?;
        }

        let new_user = NewUser {
            email: input.email,
            username: input.username,
            hashed_password: password::hash_password(&input.password)?,
            is_active: input.is_active,
            is_superuser: input.is_superuser,
        };

        let user = self.storage.db().create_user(&new_user).await?;
        info!("Registered user: {} ({})", user.id, user.username);
        Ok(user)
    }

    /// Apply a self-service update to `user`, re-hashing any new password
    pub async fn update_profile(&self, user: &User, update: UserUpdate) -> Result<User> {
        let hashed_password = match update.password {
            Some(ref plain) => Some(password::hash_password(plain)?),
            None => None,
        };

        let changes = UserChanges {
            email: update.email,
            username: update.username,
            hashed_password,
        };

        let updated = self.storage.db().update_user(user.id, &changes).await?;
        info!("Updated profile for user: {}", updated.id);
        Ok(updated)
    }

    /// Create the configured first superuser unless its email or username is taken
    ///
    /// Returns the new user, or `None` when nothing was created.
    pub async fn bootstrap_superuser(&self) -> Result<Option<User>> {
        let Some(first) = self.config.first_superuser.as_ref() else {
            return Ok(None);
        };

        let db = self.storage.db();
        if db.find_user_by_email(&first.email).await?.is_some() {
            debug!("First superuser already present: {}", first.email);
            return Ok(None);
        }
        if let Some(holder) = db.find_user_by_username(&first.username).await? {
            warn!(
                "Skipping first superuser: username {} already belongs to user {}",
                first.username, holder.id
            );
            return Ok(None);
        }

        let new_user = NewUser {
            email: first.email.clone(),
            username: first.username.clone(),
            hashed_password: password::hash_password(&first.password)?,
            is_active: true,
            is_superuser: true,
        };

        let user = self.storage.db().create_user(&new_user).await?;
        info!("Created first superuser: {} ({})", user.id, user.username);
        Ok(Some(user))
    }
}
