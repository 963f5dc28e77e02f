//! Create custom list service

use nestor_contracts::{Contract, CustomListContract};
use nestor_core::{ServiceOutcome, ServiceResult};
use nestor_models::{CreateCustomListDto, CustomList};
use nestor_store::CustomListStore;
use tracing::info;

pub struct CreateCustomListService {
    lists: CustomListStore,
}

impl CreateCustomListService {
    pub fn new(lists: CustomListStore) -> Self {
        Self { lists }
    }

    pub async fn call(&self, dto: CreateCustomListDto) -> ServiceOutcome<CustomList> {
        let list = CustomList::from(dto);

        if let Err(errors) = CustomListContract::new().validate(&list) {
            return Ok(ServiceResult::failure(errors));
        }

        let list = self.lists.save(list).await?;
        info!(list_id = %list.id, title = %list.title, "custom list created");

        Ok(ServiceResult::success(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_creates_list() {
        let service = CreateCustomListService::new(CustomListStore::new(Arc::new(
            MemoryStore::new(),
        )));

        let result = service
            .call(CreateCustomListDto {
                title: "Project tags".into(),
            })
            .await
            .unwrap();
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_rejects_blank_title() {
        let service = CreateCustomListService::new(CustomListStore::new(Arc::new(
            MemoryStore::new(),
        )));

        let result = service
            .call(CreateCustomListDto { title: "".into() })
            .await
            .unwrap();
        assert!(result.is_failure());
        assert!(result.errors().has_error("title"));
    }
}
