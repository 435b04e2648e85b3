//! Item endpoints
//!
//! Every route requires a bearer token; reads and writes on a single item
//! go through the ownership policy.

mod handlers;
mod models;

pub use handlers::{create_item, delete_item, list_items, read_item, update_item};
pub use models::{CreateItemRequest, UpdateItemRequest};

use actix_web::web;

/// Configure item routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/items")
            .service(
                web::resource("")
                    .route(web::get().to(list_items))
                    .route(web::post().to(create_item)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(read_item))
                    .route(web::put().to(update_item))
                    .route(web::delete().to(delete_item)),
            ),
    );
}
