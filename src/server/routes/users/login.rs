//! Token login endpoint

use super::models::{LoginForm, TokenResponse};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Exchange a username-or-email and password for an access token
pub async fn login(state: web::Data<AppState>, form: web::Form<LoginForm>) -> Result<HttpResponse> {
    let form = form.into_inner();
    let result = state.auth.login(&form.username, &form.password).await?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(result.access_token)))
}
