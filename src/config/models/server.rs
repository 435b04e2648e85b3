//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,
    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Number of worker threads
    pub workers: Option<usize>,
    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,
    /// Prefix all resource routes are mounted under
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
    /// Service name reported by the health endpoints
    #[serde(default = "default_project_name")]
    pub project_name: String,
    /// Upper bound applied to list `limit`; unset means uncapped
    #[serde(default)]
    pub max_page_size: Option<u64>,
    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
            max_body_size: default_max_body_size(),
            api_prefix: default_api_prefix(),
            project_name: default_project_name(),
            max_page_size: None,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Get the server address
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the number of workers (defaults to CPU count)
    pub fn worker_count(&self) -> usize {
        self.workers.unwrap_or_else(num_cpus::get)
    }

    /// Validate server configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if !self.api_prefix.is_empty()
            && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/'))
        {
            return Err(format!(
                "API prefix must start with '/' and not end with '/': {}",
                self.api_prefix
            ));
        }

        if self.max_page_size == Some(0) {
            return Err("Max page size cannot be 0".to_string());
        }

        self.cors.validate()
    }
}

/// CORS configuration
///
/// CORS is only applied when at least one origin is listed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether the CORS middleware should be installed
    pub fn is_enabled(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Parse an origin list from either a comma-separated string or a JSON array
    pub fn parse_origins(raw: &str) -> Result<Vec<String>, String> {
        let raw = raw.trim();
        if raw.starts_with('[') {
            serde_json::from_str::<Vec<String>>(raw)
                .map_err(|e| format!("Invalid CORS origin list: {}", e))
        } else {
            Ok(raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect())
        }
    }

    /// Validate CORS configuration
    pub fn validate(&self) -> Result<(), String> {
        for origin in &self.allowed_origins {
            if origin == "*" {
                return Err(
                    "CORS cannot allow all origins (*) because credentials are enabled"
                        .to_string(),
                );
            }
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(format!("CORS origin must be an http(s) URL: {}", origin));
            }
            if origin.ends_with('/') {
                warn!(
                    "CORS origin {} has a trailing slash and will not match browser Origin headers",
                    origin
                );
            }
        }
        Ok(())
    }
}
