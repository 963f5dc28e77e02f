//! Report service
//!
//! Builds the engine request from stored documents and hands it to the
//! configured engine. Tag suggestions stay local to the vocabulary lists.

use std::sync::Arc;

use chrono::NaiveDate;
use nestor_core::NestorError;
use nestor_metrics::enrich_project;
use nestor_reports::{
    suggest_tags, ProjectContext, ReportEngine, ReportKind, ReportOutput, ReportRequest,
};
use nestor_store::{ContactStore, CustomListItemStore, CustomListStore, ProjectStore};
use tracing::info;

pub struct ReportService {
    projects: ProjectStore,
    contacts: ContactStore,
    lists: CustomListStore,
    items: CustomListItemStore,
    engine: Arc<dyn ReportEngine>,
}

impl ReportService {
    pub fn new(
        projects: ProjectStore,
        contacts: ContactStore,
        lists: CustomListStore,
        items: CustomListItemStore,
        engine: Arc<dyn ReportEngine>,
    ) -> Self {
        Self {
            projects,
            contacts,
            lists,
            items,
            engine,
        }
    }

    pub async fn generate(
        &self,
        project_id: &str,
        kind: ReportKind,
        prompt: String,
        today: NaiveDate,
    ) -> Result<ReportOutput, NestorError> {
        let project = self.projects.require(project_id).await?;
        let client_name = self
            .contacts
            .get(&project.contact_id)
            .await?
            .map(|contact| contact.name);

        let request = ReportRequest {
            kind,
            prompt,
            context: ProjectContext::from_view(&enrich_project(&project, today), client_name),
        };

        let output = self
            .engine
            .generate(&request)
            .await
            .map_err(|err| NestorError::ExternalService {
                service: format!("report engine {}", self.engine.name()),
                message: err.to_string(),
            })?;

        info!(project_id = %project_id, engine = self.engine.name(), "report generated");
        Ok(output)
    }

    /// Suggest tags for `text` from one vocabulary list.
    pub async fn suggest(&self, list_id: &str, text: &str) -> Result<Vec<String>, NestorError> {
        self.lists.require(list_id).await?;

        let labels: Vec<String> = self
            .items
            .for_list(list_id)
            .await?
            .into_iter()
            .map(|item| item.label)
            .collect();

        Ok(suggest_tags(text, &labels))
    }
}
