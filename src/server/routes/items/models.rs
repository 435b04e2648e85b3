//! Request bodies for item endpoints

use crate::core::models::{ItemUpdate, NewItem};
use crate::utils::error::Result;
use crate::utils::validation::validate_title;
use serde::Deserialize;

/// Item creation body
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateItemRequest {
    pub fn into_new_item(self) -> Result<NewItem> {
        validate_title(&self.title)?;
        Ok(NewItem {
            title: self.title,
            description: self.description,
        })
    }
}

/// Item update body; only supplied fields change
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl UpdateItemRequest {
    pub fn into_item_update(self) -> Result<ItemUpdate> {
        if let Some(ref title) = self.title {
            validate_title(title)?;
        }
        Ok(ItemUpdate {
            title: self.title,
            description: self.description,
        })
    }
}
