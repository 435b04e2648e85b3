//! Configuration data models
//!
//! This module defines all configuration structures used by the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod logging;
pub mod server;
pub mod storage;

// Re-export all configuration types
pub use app::*;
pub use auth::*;
pub use logging::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    1024 * 1024 // 1MB
}

/// Default API prefix
pub fn default_api_prefix() -> String {
    "/api/v1".to_string()
}

/// Default service name
pub fn default_project_name() -> String {
    "ItemVault".to_string()
}

/// Default token lifetime: 8 days
pub fn default_access_token_expire_minutes() -> u64 {
    60 * 24 * 8
}

pub fn default_token_issuer() -> String {
    "itemvault".to_string()
}

pub fn default_database_url() -> String {
    "sqlite://itemvault.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

pub fn default_connection_timeout() -> u64 {
    5
}

pub fn default_log_level() -> String {
    "info".to_string()
}
