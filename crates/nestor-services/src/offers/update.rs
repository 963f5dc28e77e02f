//! Update offer service

use nestor_contracts::{Contract, OfferContract};
use nestor_core::{ServiceOutcome, ServiceResult, ValidationErrors};
use nestor_models::{Offer, UpdateOfferDto};
use nestor_store::{ContactStore, OfferStore, ProjectStore};
use tracing::info;

pub struct UpdateOfferService {
    offers: OfferStore,
    contacts: ContactStore,
    projects: ProjectStore,
}

impl UpdateOfferService {
    pub fn new(offers: OfferStore, contacts: ContactStore, projects: ProjectStore) -> Self {
        Self {
            offers,
            contacts,
            projects,
        }
    }

    pub async fn call(&self, id: &str, dto: UpdateOfferDto) -> ServiceOutcome<Offer> {
        let mut offer = self.offers.require(id).await?;
        dto.apply_to(&mut offer);

        let mut errors = match OfferContract::new().validate(&offer) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if dto.supplier_id.is_some() && !self.contacts.exists(&offer.supplier_id).await? {
            errors.add("supplier_id", "does not exist");
        }

        if dto.project_id.is_some() {
            if let Some(ref project_id) = offer.project_id {
                if !self.projects.exists(project_id).await? {
                    errors.add("project_id", "does not exist");
                }
            }
        }

        if let Err(errors) = errors.into_result() {
            return Ok(ServiceResult::failure(errors));
        }

        let offer = self.offers.save(offer).await?;
        info!(offer_id = %offer.id, "offer updated");

        Ok(ServiceResult::success(offer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::{Contact, ContactRole, OfferItem, Project};
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    struct Fixture {
        offers: OfferStore,
        service: UpdateOfferService,
        offer_id: String,
        project_id: String,
    }

    async fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let contacts = ContactStore::new(store.clone());
        let projects = ProjectStore::new(store.clone());
        let offers = OfferStore::new(store);

        let supplier = contacts
            .save(Contact::new("Thermo SA", ContactRole::Supplier))
            .await
            .unwrap();
        let project = projects
            .save(Project::new("Athens retrofit", "c-1"))
            .await
            .unwrap();
        let offer = offers.save(Offer::new(supplier.id)).await.unwrap();

        Fixture {
            service: UpdateOfferService::new(offers.clone(), contacts, projects),
            offers,
            offer_id: offer.id,
            project_id: project.id,
        }
    }

    #[tokio::test]
    async fn test_assigns_offer_to_project() {
        let f = fixture().await;

        let dto = UpdateOfferDto {
            project_id: Some(f.project_id.clone()),
            items: Some(vec![OfferItem {
                name: "Heat pump".into(),
                quantity: Some(1.0),
                unit_price: 4200.0,
                ..Default::default()
            }]),
            ..Default::default()
        };

        let result = f.service.call(&f.offer_id, dto).await.unwrap();
        assert!(result.is_success());

        let stored = f.offers.require(&f.offer_id).await.unwrap();
        assert_eq!(stored.project_id.as_deref(), Some(f.project_id.as_str()));
        assert_eq!(stored.items.len(), 1);
    }

    #[tokio::test]
    async fn test_rejects_unknown_project_target() {
        let f = fixture().await;

        let dto = UpdateOfferDto {
            project_id: Some("ghost".into()),
            ..Default::default()
        };

        let result = f.service.call(&f.offer_id, dto).await.unwrap();
        assert!(result.is_failure());
        assert!(result.errors().has_error("project_id"));
    }

    #[tokio::test]
    async fn test_unknown_offer_is_not_found() {
        let f = fixture().await;
        let err = f
            .service
            .call("missing", UpdateOfferDto::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
