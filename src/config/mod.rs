//! Configuration management
//!
//! Configuration is built once at start-up from an optional YAML file plus
//! environment overrides, validated, then shared read-only.

mod loader;
pub mod models;

pub use models::*;

use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Application configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("Failed to read config file: {}", e)))?;

        let mut app = Self::parse_yaml(&content)?;
        app.apply_env()?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from defaults and environment variables only
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut app = AppConfig::default();
        app.apply_env()?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document into an application configuration
    pub fn parse_yaml(content: &str) -> Result<AppConfig> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.app.storage
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.app.validate().map_err(AppError::Config)
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.app)
            .map_err(|e| AppError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
