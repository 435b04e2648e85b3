/// Item entity module
pub mod item;
/// User entity module
pub mod user;

pub use item::Entity as Item;
pub use user::Entity as User;
