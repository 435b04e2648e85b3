//! JWT token handling
//!
//! This module provides access token creation and verification.

mod handler;
pub mod types;

pub use types::{Claims, JwtHandler};
