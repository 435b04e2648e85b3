//! Item handlers
//!
//! Single-item routes look the item up first (404) and only then apply the
//! ownership policy (403).

use super::models::{CreateItemRequest, UpdateItemRequest};
use crate::auth::AccessPolicy;
use crate::core::models::{Item, User};
use crate::server::middleware::CurrentUser;
use crate::server::routes::PaginationQuery;
use crate::server::state::AppState;
use crate::utils::error::{AppError, Result};
use actix_web::{HttpResponse, web};
use tracing::{debug, info, warn};

const ITEM_NOT_FOUND: &str = "Item not found";

/// Fetch an item and check the principal may act on it
async fn load_authorized(state: &AppState, principal: &User, item_id: i32) -> Result<Item> {
    let item = state
        .storage
        .db()
        .find_item_by_id(item_id)
        .await?
        .ok_or_else(|| AppError::not_found(ITEM_NOT_FOUND))?;

    AccessPolicy::check_item(principal, &item).inspect_err(|_| {
        warn!(
            "User {} denied access to item {} owned by {}",
            principal.id, item.id, item.owner_id
        );
    })?;

    Ok(item)
}

/// List items visible to the caller
///
/// Superusers see every item; everyone else sees only their own.
pub async fn list_items(
    state: web::Data<AppState>,
    user: CurrentUser,
    query: web::Query<PaginationQuery>,
) -> Result<HttpResponse> {
    let scope = AccessPolicy::item_scope(&user);
    let (skip, limit) = query.bounds(state.max_page_size());
    debug!("Listing items {:?} skip={} limit={}", scope, skip, limit);

    let items = state.storage.db().list_items(scope, skip, limit).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// Create an item owned by the caller
pub async fn create_item(
    state: web::Data<AppState>,
    user: CurrentUser,
    request: web::Json<CreateItemRequest>,
) -> Result<HttpResponse> {
    let new_item = request.into_inner().into_new_item()?;

    let item = state.storage.db().create_item(user.id, &new_item).await?;
    info!("User {} created item {}", user.id, item.id);

    Ok(HttpResponse::Ok().json(item))
}

/// Read an item by id
pub async fn read_item(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let item = load_authorized(&state, &user, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// Update an item's title and/or description
pub async fn update_item(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
    request: web::Json<UpdateItemRequest>,
) -> Result<HttpResponse> {
    let update = request.into_inner().into_item_update()?;
    let item = load_authorized(&state, &user, path.into_inner()).await?;

    let updated = state.storage.db().update_item(item.id, &update).await?;
    info!("User {} updated item {}", user.id, updated.id);

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete an item, returning it as it was
pub async fn delete_item(
    state: web::Data<AppState>,
    user: CurrentUser,
    path: web::Path<i32>,
) -> Result<HttpResponse> {
    let item = load_authorized(&state, &user, path.into_inner()).await?;

    state.storage.db().delete_item(item.id).await?;
    info!("User {} deleted item {}", user.id, item.id);

    Ok(HttpResponse::Ok().json(item))
}
