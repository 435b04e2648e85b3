//! # ItemVault
//!
//! A small HTTP backend for user accounts and the items they own.
//!
//! ## Features
//!
//! - **Accounts**: registration with unique email and username, argon2 password hashes
//! - **Bearer tokens**: HS256 access tokens issued by a password-grant login
//! - **Ownership**: items are visible and writable only by their owner or a superuser
//! - **Storage**: SeaORM over SQLite (default) or PostgreSQL, migrated at start-up
//!
//! ## Running
//!
//! ```rust,no_run
//! use itemvault::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{Item, User};
pub use server::{AppState, HttpServer, ServerBuilder};
pub use utils::error::{AppError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
