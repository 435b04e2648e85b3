//! Environment overrides
//!
//! Variable names follow the conventional deployment names (`SECRET_KEY`,
//! `DATABASE_URL`, `PGHOST`, ...). Every override is optional.

use super::models::*;
use crate::utils::error::{AppError, Result};
use std::str::FromStr;
use tracing::debug;

fn parse<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| AppError::config(format!("Invalid {}: {}", name, e)))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::config(format!("Invalid {}: {}", name, other))),
    }
}

impl AppConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        // Server
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse("PORT", &port)?;
        }
        if let Some(workers) = lookup("WORKERS") {
            self.server.workers = Some(parse("WORKERS", &workers)?);
        }
        if let Some(prefix) = lookup("API_V1_STR") {
            self.server.api_prefix = prefix;
        }
        if let Some(name) = lookup("PROJECT_NAME") {
            self.server.project_name = name;
        }
        if let Some(size) = lookup("MAX_PAGE_SIZE") {
            self.server.max_page_size = if size.trim().is_empty() {
                None
            } else {
                Some(parse("MAX_PAGE_SIZE", &size)?)
            };
        }
        if let Some(origins) = lookup("BACKEND_CORS_ORIGINS") {
            self.server.cors.allowed_origins =
                CorsConfig::parse_origins(&origins).map_err(AppError::config)?;
        }

        // Database
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        } else if ["PGHOST", "PGUSER", "PGPASSWORD", "PGDATABASE", "PGPORT"]
            .iter()
            .any(|name| lookup(name).is_some())
        {
            let part = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());
            self.storage.database.url = DatabaseConfig::postgres_url(
                &part("PGHOST", "localhost"),
                &part("PGPORT", "5432"),
                &part("PGUSER", "postgres"),
                &part("PGPASSWORD", "postgres"),
                &part("PGDATABASE", "app"),
            );
        }
        if let Some(max) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections = parse("DATABASE_MAX_CONNECTIONS", &max)?;
        }

        // Auth
        if let Some(secret) = lookup("SECRET_KEY") {
            self.auth.secret_key = secret;
        }
        if let Some(minutes) = lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            self.auth.access_token_expire_minutes = parse("ACCESS_TOKEN_EXPIRE_MINUTES", &minutes)?;
        }
        if let Some(issuer) = lookup("TOKEN_ISSUER") {
            self.auth.token_issuer = issuer;
        }
        if let Some(open) = lookup("ALLOW_OPEN_SUPERUSER_REGISTRATION") {
            self.auth.allow_open_superuser_registration =
                parse_bool("ALLOW_OPEN_SUPERUSER_REGISTRATION", &open)?;
        }
        if let (Some(email), Some(password)) = (
            lookup("FIRST_SUPERUSER_EMAIL"),
            lookup("FIRST_SUPERUSER_PASSWORD"),
        ) {
            let username = lookup("FIRST_SUPERUSER_USERNAME").unwrap_or_else(|| "admin".to_string());
            self.auth.first_superuser = Some(FirstSuperuserConfig {
                email,
                username,
                password,
            });
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = lookup("LOG_JSON") {
            self.logging.json = parse_bool("LOG_JSON", &json)?;
        }

        Ok(())
    }
}
