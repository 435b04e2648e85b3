//! Item models

pub mod types;

pub use types::{Item, ItemScope, ItemUpdate, NewItem};
