//! Stage transition service
//!
//! Stage status moves forward through the lifecycle; going back takes an
//! explicit reopen. The derived delayed status is never written.

use nestor_core::{NestorError, ServiceOutcome, ServiceResult, ValidationErrors};
use nestor_models::{Project, StageStatus};
use nestor_store::ProjectStore;
use serde::Deserialize;
use tracing::info;

/// A requested stage status change
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTransition {
    pub status: StageStatus,

    /// Permit moving backwards in the lifecycle
    #[serde(default)]
    pub reopen: bool,
}

pub struct StageTransitionService {
    projects: ProjectStore,
}

impl StageTransitionService {
    pub fn new(projects: ProjectStore) -> Self {
        Self { projects }
    }

    pub async fn call(
        &self,
        project_id: &str,
        intervention_id: &str,
        stage_id: &str,
        transition: StageTransition,
    ) -> ServiceOutcome<Project> {
        let mut project = self.projects.require(project_id).await?;

        let intervention = project
            .interventions
            .iter_mut()
            .find(|intervention| intervention.id == intervention_id)
            .ok_or_else(|| {
                NestorError::not_found("ProjectIntervention", "id", intervention_id)
            })?;

        let stage = intervention
            .stages
            .iter_mut()
            .find(|stage| stage.id == stage_id)
            .ok_or_else(|| NestorError::not_found("Stage", "id", stage_id))?;

        let mut errors = ValidationErrors::new();
        if !transition.status.storable() {
            errors.add("status", "is derived at read time and cannot be stored");
        } else if transition.status.rank() < stage.status.rank() && !transition.reopen {
            errors.add(
                "status",
                "cannot move backwards in the lifecycle without a reopen",
            );
        }

        if let Err(errors) = errors.into_result() {
            return Ok(ServiceResult::failure(errors));
        }

        let from = stage.status;
        stage.status = transition.status;

        let project = self.projects.save(project).await?;
        info!(
            project_id = %project_id,
            stage_id = %stage_id,
            from = from.as_str(),
            to = transition.status.as_str(),
            "stage transitioned"
        );

        Ok(ServiceResult::success(project))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::{ProjectIntervention, Stage};
    use nestor_store::MemoryStore;
    use std::sync::Arc;

    struct Fixture {
        projects: ProjectStore,
        service: StageTransitionService,
        project_id: String,
        intervention_id: String,
        stage_id: String,
    }

    async fn fixture(initial: StageStatus) -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let projects = ProjectStore::new(store);

        let mut intervention = ProjectIntervention::new("mi-ins", "Roof insulation");
        intervention.id = "iv-1".into();
        intervention.stages = vec![{
            let mut stage = Stage::new("Install").with_status(initial);
            stage.id = "st-1".into();
            stage
        }];

        let mut project = Project::new("Athens retrofit", "c-1");
        project.interventions = vec![intervention];
        let project = projects.save(project).await.unwrap();

        Fixture {
            service: StageTransitionService::new(projects.clone()),
            projects,
            project_id: project.id,
            intervention_id: "iv-1".into(),
            stage_id: "st-1".into(),
        }
    }

    async fn transition(f: &Fixture, status: StageStatus, reopen: bool) -> ServiceResult<Project> {
        f.service
            .call(
                &f.project_id,
                &f.intervention_id,
                &f.stage_id,
                StageTransition { status, reopen },
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_moves_forward() {
        let f = fixture(StageStatus::Pending).await;

        let result = transition(&f, StageStatus::InProgress, false).await;
        assert!(result.is_success());

        let stored = f.projects.require(&f.project_id).await.unwrap();
        assert_eq!(
            stored.interventions[0].stages[0].status,
            StageStatus::InProgress
        );
    }

    #[tokio::test]
    async fn test_refuses_backwards_without_reopen() {
        let f = fixture(StageStatus::Completed).await;

        let result = transition(&f, StageStatus::InProgress, false).await;
        assert!(result.is_failure());
        assert!(result.errors().has_error("status"));

        let stored = f.projects.require(&f.project_id).await.unwrap();
        assert_eq!(
            stored.interventions[0].stages[0].status,
            StageStatus::Completed
        );
    }

    #[tokio::test]
    async fn test_reopen_allows_backwards() {
        let f = fixture(StageStatus::Completed).await;

        let result = transition(&f, StageStatus::InProgress, true).await;
        assert!(result.is_success());

        let stored = f.projects.require(&f.project_id).await.unwrap();
        assert_eq!(
            stored.interventions[0].stages[0].status,
            StageStatus::InProgress
        );
    }

    #[tokio::test]
    async fn test_refuses_storing_delayed() {
        let f = fixture(StageStatus::InProgress).await;

        let result = transition(&f, StageStatus::Delayed, false).await;
        assert!(result.is_failure());
        assert!(result.errors().has_error("status"));
    }

    #[tokio::test]
    async fn test_same_status_is_idempotent() {
        let f = fixture(StageStatus::InProgress).await;

        let result = transition(&f, StageStatus::InProgress, false).await;
        assert!(result.is_success());
    }

    #[tokio::test]
    async fn test_unknown_stage_is_not_found() {
        let f = fixture(StageStatus::Pending).await;

        let err = f
            .service
            .call(
                &f.project_id,
                &f.intervention_id,
                "ghost",
                StageTransition {
                    status: StageStatus::InProgress,
                    reopen: false,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
