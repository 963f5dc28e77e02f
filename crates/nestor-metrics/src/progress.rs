//! Progress aggregation
//!
//! Progress counts stages whose effective status is completed. Delay is a
//! separate, non-interacting derivation: a delayed stage never counts as
//! completed, and delay never suppresses counting of completed stages.

use chrono::NaiveDate;
use nestor_models::{Project, ProjectIntervention};

use crate::status::effective_status;

/// Percentage of an intervention's stages that are effectively completed.
/// Defined as 0 when there are no stages.
pub fn intervention_progress(intervention: &ProjectIntervention, today: NaiveDate) -> f64 {
    if intervention.stages.is_empty() {
        return 0.0;
    }
    let completed = intervention
        .stages
        .iter()
        .filter(|stage| effective_status(stage, today).is_completed())
        .count();
    completed as f64 / intervention.stages.len() as f64 * 100.0
}

/// Mean of the interventions' progress percentages.
/// Defined as 0 when the project has no interventions.
pub fn project_progress(project: &Project, today: NaiveDate) -> f64 {
    if project.interventions.is_empty() {
        return 0.0;
    }
    let total: f64 = project
        .interventions
        .iter()
        .map(|intervention| intervention_progress(intervention, today))
        .sum();
    total / project.interventions.len() as f64
}
