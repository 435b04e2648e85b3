//! User endpoints
//!
//! Registration, login, the caller's own profile and superuser lookups.

mod login;
mod me;
mod models;
mod read;
mod register;

pub use login::login;
pub use me::{read_me, update_me};
pub use models::{LoginForm, RegisterRequest, TokenResponse, UpdateMeRequest};
pub use read::{list_users, read_user};
pub use register::register;

use actix_web::web;

/// Configure user routes
///
/// `/me` and `/login/access-token` are registered ahead of `/{user_id}` so
/// they are never captured as an id.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(
                web::resource("")
                    .route(web::get().to(list_users))
                    .route(web::post().to(register)),
            )
            .route("/login/access-token", web::post().to(login))
            .service(
                web::resource("/me")
                    .route(web::get().to(read_me))
                    .route(web::put().to(update_me)),
            )
            .route("/{user_id}", web::get().to(read_user)),
    );
}
