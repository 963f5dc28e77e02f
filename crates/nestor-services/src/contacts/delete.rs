//! Delete contact service
//!
//! Refuses deletion while the contact is still referenced, whether as a
//! project owner, a stage assignee, or a quoting supplier.

use nestor_core::{NestorError, ServiceOutcome, ServiceResult};
use nestor_store::{ContactStore, OfferStore, ProjectStore};
use tracing::info;

pub struct DeleteContactService {
    contacts: ContactStore,
    projects: ProjectStore,
    offers: OfferStore,
}

impl DeleteContactService {
    pub fn new(contacts: ContactStore, projects: ProjectStore, offers: OfferStore) -> Self {
        Self {
            contacts,
            projects,
            offers,
        }
    }

    pub async fn call(&self, id: &str) -> ServiceOutcome<()> {
        self.contacts.require(id).await?;

        let owned = self.projects.for_contact(id).await?.len();
        let assigned = self.assigned_stage_count(id).await?;
        let supplying = self
            .offers
            .list()
            .await?
            .iter()
            .filter(|offer| offer.supplier_id == id)
            .count();

        if owned + assigned + supplying > 0 {
            return Err(NestorError::conflict(format!(
                "contact {} is still referenced by {} projects, {} stage assignments and {} offers",
                id, owned, assigned, supplying
            )));
        }

        self.contacts.delete(id).await?;
        info!(contact_id = %id, "contact deleted");

        Ok(ServiceResult::success(()))
    }

    async fn assigned_stage_count(&self, contact_id: &str) -> Result<usize, NestorError> {
        let projects = self.projects.list().await?;
        let count = projects
            .iter()
            .flat_map(|project| &project.interventions)
            .flat_map(|intervention| &intervention.stages)
            .filter(|stage| stage.assignee_id.as_deref() == Some(contact_id))
            .count();
        Ok(count)
    }
}
