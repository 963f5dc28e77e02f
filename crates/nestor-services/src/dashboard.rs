//! Dashboard service
//!
//! Aggregates every project into the landing-page summary. Derivation
//! happens in the metrics crate; this service only fetches and groups.

use std::collections::HashMap;

use chrono::NaiveDate;
use nestor_core::NestorError;
use nestor_metrics::{enrich_project, scan_projects, AlertWindow, Severity};
use nestor_models::ProjectStatus;
use nestor_store::{MasterInterventionStore, ProjectStore};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

/// One bar of the budget-by-category chart
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBudget {
    pub category: String,
    pub budget: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub project_count: usize,

    /// Projects per derived status, in lifecycle order
    pub status_counts: Vec<StatusCount>,

    pub total_budget: f64,

    /// Mean project progress, zero when there are no projects
    pub average_progress: f64,

    /// Budget grouped by master-catalog category, largest first
    pub budget_by_category: Vec<CategoryBudget>,

    pub overdue_alerts: usize,
    pub upcoming_alerts: usize,
}

pub struct DashboardService {
    projects: ProjectStore,
    masters: MasterInterventionStore,
    window: AlertWindow,
}

impl DashboardService {
    pub fn new(
        projects: ProjectStore,
        masters: MasterInterventionStore,
        window: AlertWindow,
    ) -> Self {
        Self {
            projects,
            masters,
            window,
        }
    }

    pub async fn summary(&self, today: NaiveDate) -> Result<DashboardSummary, NestorError> {
        let projects = self.projects.list().await?;
        let masters = self.masters.list().await?;

        let category_of: HashMap<&str, &str> = masters
            .iter()
            .map(|master| (master.id.as_str(), master.category_key()))
            .collect();

        let mut by_status: HashMap<ProjectStatus, usize> = HashMap::new();
        let mut by_category: HashMap<String, f64> = HashMap::new();
        let mut total_budget = 0.0;
        let mut progress_sum = 0.0;

        for project in &projects {
            let view = enrich_project(project, today);

            *by_status.entry(view.derived_status).or_insert(0) += 1;
            total_budget += view.total_budget;
            progress_sum += view.total_progress;

            for intervention in &view.interventions {
                let category = category_of
                    .get(intervention.master_id.as_str())
                    .copied()
                    .unwrap_or("other");
                *by_category.entry(category.to_string()).or_insert(0.0) += intervention.cost;
            }
        }

        let status_counts = ProjectStatus::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: by_status.get(&status).copied().unwrap_or(0),
            })
            .collect();

        let mut budget_by_category: Vec<CategoryBudget> = by_category
            .into_iter()
            .map(|(category, budget)| CategoryBudget { category, budget })
            .collect();
        budget_by_category
            .sort_by(|a, b| b.budget.total_cmp(&a.budget).then(a.category.cmp(&b.category)));

        let alerts = scan_projects(&projects, today, self.window);
        let overdue_alerts = alerts
            .iter()
            .filter(|alert| alert.severity == Severity::Overdue)
            .count();
        let upcoming_alerts = alerts.len() - overdue_alerts;

        let average_progress = if projects.is_empty() {
            0.0
        } else {
            progress_sum / projects.len() as f64
        };

        Ok(DashboardSummary {
            project_count: projects.len(),
            status_counts,
            total_budget,
            average_progress,
            budget_by_category,
            overdue_alerts,
            upcoming_alerts,
        })
    }
}
