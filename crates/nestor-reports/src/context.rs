//! Report input context
//!
//! A compact, serializable digest of one enriched project. Engines see
//! this instead of the raw document, so prompts stay small and a hosted
//! model never receives more than the report needs.

use nestor_metrics::ProjectView;
use serde::{Deserialize, Serialize};

/// Digest of a project handed to a report engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    pub title: String,

    /// Derived status wire name ("in-progress")
    pub status: String,

    pub client_name: Option<String>,
    pub total_budget: f64,
    pub total_progress: f64,
    pub interventions: Vec<InterventionSummary>,
}

/// One intervention inside the digest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterventionSummary {
    pub title: String,
    pub cost: f64,
    pub progress: f64,
    pub stage_count: usize,
    pub completed_stages: usize,
}

impl ProjectContext {
    /// Build the digest from an enriched view. The caller resolves the
    /// client name; the view only carries the contact id.
    pub fn from_view(view: &ProjectView, client_name: Option<String>) -> Self {
        Self {
            title: view.title.clone(),
            status: view.derived_status.as_str().to_string(),
            client_name,
            total_budget: view.total_budget,
            total_progress: view.total_progress,
            interventions: view
                .interventions
                .iter()
                .map(|intervention| InterventionSummary {
                    title: intervention.title.clone(),
                    cost: intervention.cost,
                    progress: intervention.progress,
                    stage_count: intervention.stages.len(),
                    completed_stages: intervention
                        .stages
                        .iter()
                        .filter(|stage| stage.status.is_completed())
                        .count(),
                })
                .collect(),
        }
    }
}
