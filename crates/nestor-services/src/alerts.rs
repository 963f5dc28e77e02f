//! Alert feed service

use chrono::NaiveDate;
use nestor_core::NestorError;
use nestor_metrics::{scan_projects, Alert, AlertWindow};
use nestor_store::ProjectStore;

/// Serves the deadline feed across every project.
pub struct AlertFeedService {
    projects: ProjectStore,
    window: AlertWindow,
}

impl AlertFeedService {
    pub fn new(projects: ProjectStore, window: AlertWindow) -> Self {
        Self { projects, window }
    }

    pub async fn feed(&self, today: NaiveDate) -> Result<Vec<Alert>, NestorError> {
        let projects = self.projects.list().await?;
        Ok(scan_projects(&projects, today, self.window))
    }
}
