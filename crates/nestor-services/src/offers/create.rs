//! Create offer service

use nestor_contracts::{Contract, OfferContract};
use nestor_core::{ServiceOutcome, ServiceResult, ValidationErrors};
use nestor_models::{CreateOfferDto, Offer};
use nestor_store::{ContactStore, OfferStore, ProjectStore};
use tracing::info;

/// Records a supplier quotation, optionally tied to a project.
pub struct CreateOfferService {
    offers: OfferStore,
    contacts: ContactStore,
    projects: ProjectStore,
}

impl CreateOfferService {
    pub fn new(offers: OfferStore, contacts: ContactStore, projects: ProjectStore) -> Self {
        Self {
            offers,
            contacts,
            projects,
        }
    }

    pub async fn call(&self, dto: CreateOfferDto) -> ServiceOutcome<Offer> {
        let offer = Offer::from(dto);

        let mut errors = match OfferContract::new().validate(&offer) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !offer.supplier_id.is_empty() && !self.contacts.exists(&offer.supplier_id).await? {
            errors.add("supplier_id", "does not exist");
        }

        if let Some(ref project_id) = offer.project_id {
            if !self.projects.exists(project_id).await? {
                errors.add("project_id", "does not exist");
            }
        }

        if let Err(errors) = errors.into_result() {
            return Ok(ServiceResult::failure(errors));
        }

        let offer = self.offers.save(offer).await?;
        info!(offer_id = %offer.id, supplier_id = %offer.supplier_id, "offer created");

        Ok(ServiceResult::success(offer))
    }
}
