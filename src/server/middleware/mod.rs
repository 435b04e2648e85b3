//! Request-scoped authentication
//!
//! Handlers receive the principal as an explicit extractor argument rather
//! than through a wrapping middleware, so public and protected routes can
//! share one scope.

mod auth;
mod helpers;


pub use auth::{CurrentUser, OptionalUser};
pub use helpers::extract_auth_method;
