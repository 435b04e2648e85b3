//! Health check and status endpoints

use crate::server::state::AppState;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check));
}

/// Liveness message at the service root
#[derive(Debug, Serialize)]
struct RootStatus {
    status: Cow<'static, str>,
    message: String,
}

/// Health status with storage reachability
#[derive(Debug, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    storage: crate::storage::StorageHealthStatus,
}

/// Root endpoint: confirms the process is serving requests
pub async fn root(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(RootStatus {
        status: Cow::Borrowed("ok"),
        message: format!("{} is running", state.config.server().project_name),
    })
}

/// Health check endpoint
///
/// Returns 503 when the database cannot be reached.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let storage = state.storage.health_check().await;
    let healthy = storage.database;

    let body = HealthStatus {
        status: Cow::Borrowed(if healthy { "healthy" } else { "unhealthy" }),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(crate::VERSION),
        storage,
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
