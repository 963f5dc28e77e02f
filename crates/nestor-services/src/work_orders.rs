//! Work-order service
//!
//! Assembles the printable work order: the enriched project plus the
//! resolved names of everyone involved.

use chrono::NaiveDate;
use nestor_core::NestorError;
use nestor_metrics::{enrich_project, ProjectView};
use nestor_store::{ContactStore, ProjectStore};
use serde::Serialize;

/// A resolved person reference
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub project: ProjectView,
    pub client: ContactRef,

    /// Stage assignees, deduplicated, in name order
    pub assignees: Vec<ContactRef>,

    pub generated_on: NaiveDate,
}

pub struct WorkOrderService {
    projects: ProjectStore,
    contacts: ContactStore,
}

impl WorkOrderService {
    pub fn new(projects: ProjectStore, contacts: ContactStore) -> Self {
        Self { projects, contacts }
    }

    pub async fn build(
        &self,
        project_id: &str,
        today: NaiveDate,
    ) -> Result<WorkOrder, NestorError> {
        let project = self.projects.require(project_id).await?;
        let client = self.contacts.require(&project.contact_id).await?;

        let mut assignee_ids: Vec<&str> = project
            .interventions
            .iter()
            .flat_map(|intervention| &intervention.stages)
            .filter_map(|stage| stage.assignee_id.as_deref())
            .collect();
        assignee_ids.sort_unstable();
        assignee_ids.dedup();

        // Stale assignments are skipped
        let mut assignees = Vec::with_capacity(assignee_ids.len());
        for id in assignee_ids {
            if let Some(contact) = self.contacts.get(id).await? {
                assignees.push(ContactRef {
                    id: contact.id,
                    name: contact.name,
                });
            }
        }
        assignees.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(WorkOrder {
            project: enrich_project(&project, today),
            client: ContactRef {
                id: client.id,
                name: client.name,
            },
            assignees,
            generated_on: today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::{Contact, ContactRole, Project, ProjectIntervention, Stage, StageStatus};
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_resolves_client_and_assignees() {
        let store = Arc::new(MemoryStore::new());
        let contacts = ContactStore::new(store.clone());
        let projects = ProjectStore::new(store);

        let client = contacts
            .save(Contact::new("Maria Papadopoulou", ContactRole::Client))
            .await
            .unwrap();
        let technician = contacts
            .save(Contact::new("Nikos Ioannou", ContactRole::Technician))
            .await
            .unwrap();

        let mut survey = Stage::new("Survey").with_status(StageStatus::Completed);
        survey.assignee_id = Some(technician.id.clone());
        let mut install = Stage::new("Install");
        install.assignee_id = Some(technician.id.clone());
        let orphan = {
            let mut stage = Stage::new("Commission");
            stage.assignee_id = Some("ghost".into());
            stage
        };

        let mut intervention = ProjectIntervention::new("mi-ins", "Roof insulation");
        intervention.stages = vec![survey, install, orphan];

        let mut project = Project::new("Athens retrofit", client.id.clone());
        project.interventions = vec![intervention];
        let project = projects.save(project).await.unwrap();

        let service = WorkOrderService::new(projects, contacts);
        let today = date(2024, 6, 10);
        let order = service.build(&project.id, today).await.unwrap();

        assert_eq!(order.client.name, "Maria Papadopoulou");
        assert_eq!(order.generated_on, today);
        assert_eq!(order.project.interventions.len(), 1);

        // Deduplicated, ghost skipped
        assert_eq!(order.assignees.len(), 1);
        assert_eq!(order.assignees[0].name, "Nikos Ioannou");
    }

    #[tokio::test]
    async fn test_unknown_project_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service =
            WorkOrderService::new(ProjectStore::new(store.clone()), ContactStore::new(store));

        let err = service.build("missing", date(2024, 6, 10)).await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
