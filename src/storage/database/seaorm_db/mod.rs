// Module declarations
mod connection;
mod item_ops;
mod types;
mod user_ops;


// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
