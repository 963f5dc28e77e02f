//! List item services

use nestor_contracts::{Contract, CustomListItemContract};
use nestor_core::{NestorError, ServiceOutcome, ServiceResult};
use nestor_models::{CreateCustomListItemDto, CustomListItem};
use nestor_store::{CustomListItemStore, CustomListStore};
use tracing::info;

/// Appends an item to a list, at the end unless a position is given.
pub struct AddListItemService {
    lists: CustomListStore,
    items: CustomListItemStore,
}

impl AddListItemService {
    pub fn new(lists: CustomListStore, items: CustomListItemStore) -> Self {
        Self { lists, items }
    }

    pub async fn call(
        &self,
        list_id: &str,
        dto: CreateCustomListItemDto,
    ) -> ServiceOutcome<CustomListItem> {
        self.lists.require(list_id).await?;

        let mut item = CustomListItem::new(list_id, dto.label);
        item.position = match dto.position {
            Some(position) => position,
            None => self.items.for_list(list_id).await?.len() as i32,
        };

        if let Err(errors) = CustomListItemContract::new().validate(&item) {
            return Ok(ServiceResult::failure(errors));
        }

        let item = self.items.save(item).await?;
        info!(list_id = %list_id, item_id = %item.id, "list item added");

        Ok(ServiceResult::success(item))
    }
}

/// Removes one item from a list.
pub struct RemoveListItemService {
    items: CustomListItemStore,
}

impl RemoveListItemService {
    pub fn new(items: CustomListItemStore) -> Self {
        Self { items }
    }

    pub async fn call(&self, list_id: &str, item_id: &str) -> ServiceOutcome<()> {
        let item = self.items.require(item_id).await?;
        if item.list_id != list_id {
            return Err(NestorError::not_found("CustomListItem", "id", item_id));
        }

        self.items.delete(item_id).await?;
        info!(list_id = %list_id, item_id = %item_id, "list item removed");

        Ok(ServiceResult::success(()))
    }
}
