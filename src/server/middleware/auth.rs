//! Principal extractors

use crate::auth::{AuthError, AuthMethod};
use crate::core::models::User;
use crate::server::middleware::helpers::extract_auth_method;
use crate::server::state::AppState;
use crate::utils::error::AppError;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use std::ops::Deref;
use tracing::debug;

/// The authenticated, active user behind a request
///
/// Rejects with 401 when no bearer token is present or the token does not
/// resolve to a live user, and with 400 when that user is inactive.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl Deref for CurrentUser {
    type Target = User;

    fn deref(&self) -> &User {
        &self.0
    }
}

impl CurrentUser {
    /// Unwrap into the user record
    pub fn into_inner(self) -> User {
        self.0
    }
}

fn app_state(req: &HttpRequest) -> Result<web::Data<AppState>, AppError> {
    req.app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| AppError::internal("Application state is not configured"))
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let auth_method = extract_auth_method(req.headers());
        let state = app_state(req);

        Box::pin(async move {
            let state = state?;
            match auth_method {
                AuthMethod::Bearer(token) => state.auth.authenticate(&token).await.map(CurrentUser),
                AuthMethod::None => {
                    debug!("No bearer token on protected route");
                    Err(AuthError::MissingToken.into())
                }
            }
        })
    }
}

/// The caller, if a valid bearer token was presented
///
/// Never rejects: a missing or unusable token yields `None`.
#[derive(Debug, Clone, Default)]
pub struct OptionalUser(pub Option<User>);

impl OptionalUser {
    /// Borrow the user, if any
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

impl FromRequest for OptionalUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let auth_method = extract_auth_method(req.headers());
        let state = app_state(req);

        Box::pin(async move {
            let state = state?;
            let AuthMethod::Bearer(token) = auth_method else {
                return Ok(OptionalUser(None));
            };
            match state.auth.authenticate(&token).await {
                Ok(user) => Ok(OptionalUser(Some(user))),
                Err(e) if e.is_internal() => Err(e),
                Err(e) => {
                    debug!("Ignoring unusable bearer token: {}", e);
                    Ok(OptionalUser(None))
                }
            }
        })
    }
}
