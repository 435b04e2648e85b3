//! Core data models
//!
//! Plain records shared by the store, the credential service and the HTTP
//! handlers.

pub mod item;
pub mod user;

pub use item::{Item, ItemScope, ItemUpdate, NewItem};
pub use user::{NewUser, User, UserChanges, UserCreate, UserUpdate};
