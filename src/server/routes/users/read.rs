//! User lookups

use crate::auth::AccessPolicy;
use crate::server::middleware::CurrentUser;
use crate::server::routes::PaginationQuery;
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Read a user by id
///
/// Reading yourself always succeeds. Any other id requires a superuser,
/// checked before the existence lookup.
pub async fn read_user(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    if user_id == user.id {
        return Ok(HttpResponse::Ok().json(user.into_inner()));
    }

    AccessPolicy::check_read_user(&user, user_id)?;

    let target = state
        .storage
        .db()
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::not_found("The user with this id does not exist in the system"))?;

    Ok(HttpResponse::Ok().json(target))
}

/// List users (superuser only)
pub async fn list_users(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse> {
    AccessPolicy::check_list_users(&user)?;

    let (skip, limit) = query.bounds(state.max_page_size());
    debug!("Listing users skip={} limit={}", skip, limit);

    let users = state.storage.db().list_users(skip, limit).await?;
    Ok(HttpResponse::Ok().json(users))
}
