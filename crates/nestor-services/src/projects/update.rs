//! Update project service
//!
//! `interventions` in the DTO replaces the nested sequence wholesale, so
//! a replacement revalidates every stage and line item it carries.

use nestor_contracts::{Contract, ProjectContract};
use nestor_core::{ServiceOutcome, ServiceResult, ValidationErrors};
use nestor_models::{Project, UpdateProjectDto};
use nestor_store::{ContactStore, MasterInterventionStore, ProjectStore};
use tracing::info;

pub struct UpdateProjectService {
    projects: ProjectStore,
    contacts: ContactStore,
    masters: MasterInterventionStore,
}

impl UpdateProjectService {
    pub fn new(
        projects: ProjectStore,
        contacts: ContactStore,
        masters: MasterInterventionStore,
    ) -> Self {
        Self {
            projects,
            contacts,
            masters,
        }
    }

    pub async fn call(&self, id: &str, dto: UpdateProjectDto) -> ServiceOutcome<Project> {
        let mut project = self.projects.require(id).await?;
        dto.apply_to(&mut project);

        let mut errors = match ProjectContract::new().validate(&project) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if dto.contact_id.is_some() && !self.contacts.exists(&project.contact_id).await? {
            errors.add("contact_id", "does not exist");
        }

        if dto.interventions.is_some() {
            for (index, intervention) in project.interventions.iter().enumerate() {
                if !intervention.master_id.is_empty()
                    && !self.masters.exists(&intervention.master_id).await?
                {
                    errors.add(
                        format!("interventions[{}].master_id", index),
                        "does not exist",
                    );
                }
            }
        }

        if let Err(errors) = errors.into_result() {
            return Ok(ServiceResult::failure(errors));
        }

        let project = self.projects.save(project).await?;
        info!(project_id = %project.id, "project updated");

        Ok(ServiceResult::success(project))
    }
}
