use crate::core::models::{Item, ItemScope, ItemUpdate, NewItem};
use crate::utils::error::{AppError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, item};
use super::types::{MAX_ROWS, SeaOrmDatabase};

const ITEM_NOT_FOUND: &str = "Item not found";

impl SeaOrmDatabase {
    /// Create an item owned by `owner_id`
    pub async fn create_item(&self, owner_id: i32, new_item: &NewItem) -> Result<Item> {
        debug!("Creating item for owner: {}", owner_id);

        let model = item::Model::from_new_item(new_item, owner_id)
            .insert(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.to_domain_item())
    }

    /// Find item by ID
    pub async fn find_item_by_id(&self, item_id: i32) -> Result<Option<Item>> {
        debug!("Finding item by ID: {}", item_id);

        let model = entities::Item::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(model.map(|m| m.to_domain_item()))
    }

    /// List items visible in `scope`, in insertion order
    pub async fn list_items(&self, scope: ItemScope, skip: u64, limit: u64) -> Result<Vec<Item>> {
        debug!(
            "Listing items: scope={:?}, skip={}, limit={}",
            scope, skip, limit
        );

        let mut query = entities::Item::find();
        if let ItemScope::OwnedBy(owner_id) = scope {
            query = query.filter(item::Column::OwnerId.eq(owner_id));
        }

        let models = query
            .order_by_asc(item::Column::Id)
            .offset(skip.min(MAX_ROWS))
            .limit(limit.min(MAX_ROWS))
            .all(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(models.iter().map(|m| m.to_domain_item()).collect())
    }

    /// Apply partial changes to an item; the owner never changes
    pub async fn update_item(&self, item_id: i32, update: &ItemUpdate) -> Result<Item> {
        debug!("Updating item: {}", item_id);

        let model = entities::Item::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::not_found(ITEM_NOT_FOUND))?;

        let mut active_model: item::ActiveModel = model.into();
        if let Some(title) = &update.title {
            active_model.title = Set(title.clone());
        }
        if let Some(description) = &update.description {
            active_model.description = Set(Some(description.clone()));
        }
        active_model.updated_at = Set(chrono::Utc::now().into());

        let updated = active_model
            .update(&self.db)
            .await
            .map_err(AppError::Database)?;

        Ok(updated.to_domain_item())
    }

    /// Delete an item by ID
    pub async fn delete_item(&self, item_id: i32) -> Result<()> {
        debug!("Deleting item: {}", item_id);

        let result = entities::Item::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(ITEM_NOT_FOUND));
        }
        Ok(())
    }
}
