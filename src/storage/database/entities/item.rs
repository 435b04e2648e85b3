use sea_orm::Set;
use sea_orm::entity::prelude::*;

use crate::core::models::NewItem;

/// Item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Title
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Owning user
    pub owner_id: i32,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain item model
    pub fn to_domain_item(&self) -> crate::core::models::Item {
        crate::core::models::Item {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            owner_id: self.owner_id,
            created_at: self.created_at.naive_utc().and_utc(),
            updated_at: self.updated_at.naive_utc().and_utc(),
        }
    }

    /// Build an insertable active model owned by `owner_id`
    pub fn from_new_item(item: &NewItem, owner_id: i32) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            title: Set(item.title.clone()),
            description: Set(item.description.clone()),
            owner_id: Set(owner_id),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            ..Default::default()
        }
    }
}
