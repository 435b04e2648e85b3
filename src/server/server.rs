//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::auth::AuthSystem;
use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::StorageLayer;
use crate::utils::error::{AppError, Result};
use actix_cors::Cors;
use actix_web::{
    App, HttpResponse, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, NormalizePath, TrailingSlash},
    web,
};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    ///
    /// Connects storage, applies migrations and creates the configured
    /// first superuser before any request can be served.
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let storage = Arc::new(StorageLayer::new(config.storage()).await?);
        storage.migrate().await?;

        let auth = AuthSystem::new(config.auth(), Arc::clone(&storage));
        if let Some(user) = auth.bootstrap_superuser().await? {
            info!("Bootstrapped superuser {}", user.email);
        }

        let state = AppState::new(config.clone(), auth, storage);

        Ok(Self {
            config: config.server().clone(),
            state,
        })
    }

    /// Build the Actix-web application around shared state
    ///
    /// Extractor failures (bad JSON, form, query or path values) are reported
    /// as validation errors in the service's error envelope.
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        debug!("Setting up routes and middleware");

        let server_config = state.config.server().clone();
        let cors = Self::build_cors(&server_config);
        let max_body_size = server_config.max_body_size;

        App::new()
            .app_data(state)
            .app_data(
                web::JsonConfig::default()
                    .limit(max_body_size)
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .app_data(
                web::FormConfig::default()
                    .limit(max_body_size)
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .app_data(
                web::PathConfig::default()
                    .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
            )
            .wrap(cors)
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .wrap(DefaultHeaders::new().add(("Server", "ItemVault")))
            .configure(routes::health::configure_routes)
            .configure(|cfg| routes::configure_routes(cfg, &server_config.api_prefix))
            .default_service(web::to(|| async {
                Err::<HttpResponse, _>(AppError::not_found("Not Found"))
            }))
    }

    /// Cross-origin policy from the configured origin list
    ///
    /// An empty list yields a policy that only admits same-origin requests.
    fn build_cors(config: &ServerConfig) -> Cors {
        let mut cors = Cors::default();

        if config.cors.is_enabled() {
            for origin in &config.cors.allowed_origins {
                cors = cors.allowed_origin(origin);
            }
            cors = cors
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();
        }

        cors
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        let port = self.config.port;
        let workers = self.config.worker_count();

        info!("Starting HTTP server on {} with {} workers", bind_addr, workers);

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .workers(workers)
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr, port))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| AppError::server(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
