//! Delete custom list service
//!
//! Items are owned by their list and go with it.

use nestor_core::{ServiceOutcome, ServiceResult};
use nestor_store::{CustomListItemStore, CustomListStore};
use tracing::info;

pub struct DeleteCustomListService {
    lists: CustomListStore,
    items: CustomListItemStore,
}

impl DeleteCustomListService {
    pub fn new(lists: CustomListStore, items: CustomListItemStore) -> Self {
        Self { lists, items }
    }

    pub async fn call(&self, id: &str) -> ServiceOutcome<()> {
        self.lists.require(id).await?;

        let items = self.items.for_list(id).await?;
        let removed = items.len();
        for item in items {
            self.items.delete(&item.id).await?;
        }

        self.lists.delete(id).await?;
        info!(list_id = %id, removed_items = removed, "custom list deleted");

        Ok(ServiceResult::success(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::{CustomList, CustomListItem};
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_deletes_list_and_its_items() {
        let store = Arc::new(MemoryStore::new());
        let lists = CustomListStore::new(store.clone());
        let items = CustomListItemStore::new(store);

        let list = lists.save(CustomList::new("Project tags")).await.unwrap();
        let kept_list = lists.save(CustomList::new("Regions")).await.unwrap();

        let owned = items
            .save(CustomListItem::new(list.id.clone(), "insulation"))
            .await
            .unwrap();
        let foreign = items
            .save(CustomListItem::new(kept_list.id.clone(), "Attica"))
            .await
            .unwrap();

        let service = DeleteCustomListService::new(lists.clone(), items.clone());
        let result = service.call(&list.id).await.unwrap();
        assert!(result.is_success());

        assert!(lists.get(&list.id).await.unwrap().is_none());
        assert!(items.get(&owned.id).await.unwrap().is_none());

        // Other lists and their items are untouched
        assert!(lists.get(&kept_list.id).await.unwrap().is_some());
        assert!(items.get(&foreign.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_list_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = DeleteCustomListService::new(
            CustomListStore::new(store.clone()),
            CustomListItemStore::new(store),
        );

        let err = service.call("missing").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
