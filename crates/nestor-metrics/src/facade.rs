//! Metrics facade
//!
//! Composes status derivation, financial rollup, and progress aggregation
//! into one enriched, render-ready view of a project. The input is never
//! mutated; the output is a new value safe to memoize per input identity.

use chrono::{DateTime, NaiveDate, Utc};
use nestor_models::{
    DocId, Project, ProjectIntervention, ProjectStatus, Stage, StageStatus, SubIntervention,
};
use serde::Serialize;

use crate::progress::{intervention_progress, project_progress};
use crate::rollup::{intervention_cost, project_budget};
use crate::status::effective_status;

/// A stage with its effective display status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageView {
    pub id: DocId,
    pub title: String,
    /// Effective status as of the scan date
    pub status: StageStatus,
    pub deadline: Option<NaiveDate>,
    pub assignee_id: Option<DocId>,
    /// Status as stored, kept so a view downgrades losslessly
    #[serde(skip)]
    stored_status: StageStatus,
}

/// An intervention annotated with cost and progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionView {
    pub id: DocId,
    pub master_id: DocId,
    pub title: String,
    pub stages: Vec<StageView>,
    pub sub_interventions: Vec<SubIntervention>,
    pub cost_override: Option<f64>,
    /// Rolled-up cost in EUR
    pub cost: f64,
    /// Completion percentage, 0..=100
    pub progress: f64,
}

/// A project annotated with budget, progress, and derived status
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub id: DocId,
    pub title: String,
    /// Stored bookkeeping status
    pub status: ProjectStatus,
    /// Status derived from the interventions' aggregate state
    pub derived_status: ProjectStatus,
    pub contact_id: DocId,
    pub interventions: Vec<InterventionView>,
    pub notes: Option<String>,
    pub total_budget: f64,
    pub total_progress: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Enrich a project with every derived metric consumed by the dashboard,
/// work-order, and calendar surfaces.
pub fn enrich_project(project: &Project, today: NaiveDate) -> ProjectView {
    let interventions = project
        .interventions
        .iter()
        .map(|intervention| enrich_intervention(intervention, today))
        .collect();

    ProjectView {
        id: project.id.clone(),
        title: project.title.clone(),
        status: project.status,
        derived_status: derived_status(project, today),
        contact_id: project.contact_id.clone(),
        interventions,
        notes: project.notes.clone(),
        total_budget: project_budget(project),
        total_progress: project_progress(project, today),
        created_at: project.created_at,
        updated_at: project.updated_at,
    }
}

fn enrich_intervention(intervention: &ProjectIntervention, today: NaiveDate) -> InterventionView {
    let stages = intervention
        .stages
        .iter()
        .map(|stage| StageView {
            id: stage.id.clone(),
            title: stage.title.clone(),
            status: effective_status(stage, today),
            deadline: stage.deadline,
            assignee_id: stage.assignee_id.clone(),
            stored_status: stage.status,
        })
        .collect();

    InterventionView {
        id: intervention.id.clone(),
        master_id: intervention.master_id.clone(),
        title: intervention.title.clone(),
        stages,
        sub_interventions: intervention.sub_interventions.clone(),
        cost_override: intervention.cost_override,
        cost: intervention_cost(intervention),
        progress: intervention_progress(intervention, today),
    }
}

/// Derive the project status from its stages' aggregate state.
///
/// On-hold and cancelled are deliberate human decisions and pass through.
/// Otherwise: every stage of a non-empty project effectively completed
/// means completed; any stage started means in-progress; else the stored
/// status stands.
pub fn derived_status(project: &Project, today: NaiveDate) -> ProjectStatus {
    if matches!(
        project.status,
        ProjectStatus::OnHold | ProjectStatus::Cancelled
    ) {
        return project.status;
    }

    let mut stage_count = 0usize;
    let mut all_completed = true;
    let mut any_started = false;

    for intervention in &project.interventions {
        for stage in &intervention.stages {
            stage_count += 1;
            if !effective_status(stage, today).is_completed() {
                all_completed = false;
            }
            if stage.status != StageStatus::Pending {
                any_started = true;
            }
        }
    }

    if stage_count > 0 && all_completed {
        ProjectStatus::Completed
    } else if any_started {
        ProjectStatus::InProgress
    } else {
        project.status
    }
}

impl ProjectView {
    /// Downgrade the view back to a plain project, restoring the stored
    /// stage statuses. Together with `enrich_project` this makes the facade
    /// idempotent on its annotations.
    pub fn into_project(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            status: self.status,
            contact_id: self.contact_id,
            interventions: self
                .interventions
                .into_iter()
                .map(InterventionView::into_intervention)
                .collect(),
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl InterventionView {
    fn into_intervention(self) -> ProjectIntervention {
        ProjectIntervention {
            id: self.id,
            master_id: self.master_id,
            title: self.title,
            stages: self.stages.into_iter().map(StageView::into_stage).collect(),
            sub_interventions: self.sub_interventions,
            cost_override: self.cost_override,
        }
    }
}

impl StageView {
    fn into_stage(self) -> Stage {
        Stage {
            id: self.id,
            title: self.title,
            status: self.stored_status,
            deadline: self.deadline,
            assignee_id: self.assignee_id,
        }
    }
}
