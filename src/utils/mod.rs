//! Utility modules
//!
//! - **error**: the crate error type and its HTTP mapping
//! - **logging**: tracing subscriber set-up
//! - **validation**: input rules shared by handlers and config

pub mod error;
pub mod logging;
pub mod validation;
