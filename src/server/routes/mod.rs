//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by resource.

pub mod health;
pub mod items;
pub mod users;

use actix_web::web;
use serde::Deserialize;

/// Mount the resource routes under `api_prefix`
pub fn configure_routes(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    cfg.service(
        web::scope(api_prefix)
            .configure(users::configure_routes)
            .configure(items::configure_routes),
    );
}

/// Query parameters for `skip`/`limit` pagination
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationQuery {
    /// Rows to skip
    #[serde(default)]
    pub skip: u64,
    /// Maximum rows to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    100
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

/// Largest offset or row count the SQL drivers accept
const MAX_SQL_ROWS: u64 = i64::MAX as u64;

impl PaginationQuery {
    /// `(skip, limit)` with `limit` clamped to the configured page size, if any
    ///
    /// Both values are also capped at `i64::MAX`.
    pub fn bounds(&self, max_page_size: Option<u64>) -> (u64, u64) {
        let limit = match max_page_size {
            Some(max) => self.limit.min(max),
            None => self.limit,
        };
        (self.skip.min(MAX_SQL_ROWS), limit.min(MAX_SQL_ROWS))
    }
}
