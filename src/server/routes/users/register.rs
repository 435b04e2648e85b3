//! User registration endpoint

use super::models::RegisterRequest;
use crate::server::middleware::OptionalUser;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Register a new user
///
/// Anonymous callers may register ordinary accounts. Requesting
/// `is_superuser` additionally requires a superuser bearer token unless open
/// superuser registration is configured.
pub async fn register(
    state: web::Data<AppState>,
    caller: OptionalUser,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let input = request.into_inner().into_user_create()?;
    info!("Registration request for username: {}", input.username);

    let user = state.auth.register(input, caller.user()).await?;

    Ok(HttpResponse::Ok().json(user))
}
