//! The caller's own profile

use super::models::UpdateMeRequest;
use crate::server::middleware::CurrentUser;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Return the authenticated user
pub async fn read_me(user: CurrentUser) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(user.into_inner()))
}

/// Update the authenticated user's email, username and/or password
pub async fn update_me(
    state: web::Data<AppState>,
    user: CurrentUser,
    request: web::Json<UpdateMeRequest>,
) -> Result<HttpResponse> {
    let update = request.into_inner().into_user_update()?;
    if update.is_empty() {
        return Ok(HttpResponse::Ok().json(user.into_inner()));
    }

    let updated = state.auth.update_profile(&user, update).await?;
    Ok(HttpResponse::Ok().json(updated))
}
