//! Authentication and authorization
//!
//! Password hashing, bearer token issuance/verification, principal
//! resolution and the ownership/superuser access policy.

pub mod jwt;
pub mod password;
pub mod policy;
mod system;
pub mod types;


pub use jwt::{Claims, JwtHandler};
pub use policy::AccessPolicy;
pub use system::AuthSystem;
pub use types::{AuthError, AuthMethod, LoginResult};
