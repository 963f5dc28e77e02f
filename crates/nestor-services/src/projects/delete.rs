//! Delete project service
//!
//! Offers pointing at the project survive as unassigned quotations; the
//! delete detaches them rather than cascading.

use nestor_core::{ServiceOutcome, ServiceResult};
use nestor_store::{OfferStore, ProjectStore};
use tracing::info;

pub struct DeleteProjectService {
    projects: ProjectStore,
    offers: OfferStore,
}

impl DeleteProjectService {
    pub fn new(projects: ProjectStore, offers: OfferStore) -> Self {
        Self { projects, offers }
    }

    pub async fn call(&self, id: &str) -> ServiceOutcome<()> {
        self.projects.require(id).await?;

        let linked = self.offers.for_project(id).await?;
        let detached = linked.len();
        for mut offer in linked {
            offer.detach();
            self.offers.save(offer).await?;
        }

        self.projects.delete(id).await?;
        info!(project_id = %id, detached_offers = detached, "project deleted");

        Ok(ServiceResult::success(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::{Offer, Project};
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_detaches_offers_and_deletes() {
        let store = Arc::new(MemoryStore::new());
        let projects = ProjectStore::new(store.clone());
        let offers = OfferStore::new(store);

        let project = projects
            .save(Project::new("Athens retrofit", "c-1"))
            .await
            .unwrap();

        let mut linked = Offer::new("c-supplier");
        linked.project_id = Some(project.id.clone());
        let linked = offers.save(linked).await.unwrap();

        let unrelated = offers.save(Offer::new("c-supplier")).await.unwrap();

        let service = DeleteProjectService::new(projects.clone(), offers.clone());
        let result = service.call(&project.id).await.unwrap();
        assert!(result.is_success());

        assert!(projects.get(&project.id).await.unwrap().is_none());

        // The linked offer survives, now unassigned
        let survivor = offers.require(&linked.id).await.unwrap();
        assert!(survivor.project_id.is_none());
        assert!(offers.get(&unrelated.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unknown_project_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service =
            DeleteProjectService::new(ProjectStore::new(store.clone()), OfferStore::new(store));

        let err = service.call("missing").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
