//! User models
//!
//! This module defines the account record and the payloads that create or
//! change one.

pub mod types;

pub use types::{NewUser, User, UserChanges, UserCreate, UserUpdate};
