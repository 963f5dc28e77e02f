//! Create project service

use nestor_contracts::{Contract, ProjectContract};
use nestor_core::{ServiceOutcome, ServiceResult, ValidationErrors};
use nestor_models::{CreateProjectDto, Project};
use nestor_store::{ContactStore, ProjectStore};
use tracing::info;

/// Creates a project owned by an existing contact. Interventions are
/// added afterwards through updates.
pub struct CreateProjectService {
    projects: ProjectStore,
    contacts: ContactStore,
}

impl CreateProjectService {
    pub fn new(projects: ProjectStore, contacts: ContactStore) -> Self {
        Self { projects, contacts }
    }

    pub async fn call(&self, dto: CreateProjectDto) -> ServiceOutcome<Project> {
        let project = Project::from(dto);

        let mut errors = match ProjectContract::new().validate(&project) {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !project.contact_id.is_empty() && !self.contacts.exists(&project.contact_id).await? {
            errors.add("contact_id", "does not exist");
        }

        if let Err(errors) = errors.into_result() {
            return Ok(ServiceResult::failure(errors));
        }

        let project = self.projects.save(project).await?;
        info!(project_id = %project.id, title = %project.title, "project created");

        Ok(ServiceResult::success(project))
    }
}
