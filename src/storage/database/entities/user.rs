use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::core::models::NewUser;

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// User ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Email address (unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Username (unique)
    #[sea_orm(unique)]
    pub username: String,

    /// Argon2 password hash
    pub hashed_password: String,

    /// Whether the account may authenticate
    pub is_active: bool,

    /// Superuser flag
    pub is_superuser: bool,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// User entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Items owned by this user
    #[sea_orm(has_many = "super::item::Entity")]
    Items,
}

impl Related<super::item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain_user(&self) -> crate::core::models::User {
        crate::core::models::User {
            id: self.id,
            email: self.email.clone(),
            username: self.username.clone(),
            hashed_password: self.hashed_password.clone(),
            is_active: self.is_active,
            is_superuser: self.is_superuser,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Build an insertable active model; the id is assigned by the database
    pub fn from_new_user(user: &NewUser) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            email: Set(user.email.clone()),
            username: Set(user.username.clone()),
            hashed_password: Set(user.hashed_password.clone()),
            is_active: Set(user.is_active),
            is_superuser: Set(user.is_superuser),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
    }
}
