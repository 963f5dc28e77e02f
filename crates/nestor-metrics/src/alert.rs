//! Deadline scanning
//!
//! Produces the finite alert sequence behind the calendar and the dashboard
//! alert feed. Ordering is deadline ascending with ties broken by project
//! title then stage title; the calendar must render identically across
//! re-renders, so the order is deterministic by construction.

use chrono::{Duration, NaiveDate};
use nestor_models::{DocId, Project, StageStatus};
use serde::Serialize;

use crate::status::effective_status;

/// Alert severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Overdue,
    Upcoming,
}

/// Lookahead window for upcoming-deadline alerts
#[derive(Debug, Clone, Copy)]
pub struct AlertWindow {
    pub lookahead_days: u32,
}

impl Default for AlertWindow {
    fn default() -> Self {
        Self { lookahead_days: 7 }
    }
}

impl AlertWindow {
    pub fn days(lookahead_days: u32) -> Self {
        Self { lookahead_days }
    }
}

/// One overdue or upcoming stage deadline
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub project_id: DocId,
    pub project_title: String,
    pub intervention_id: DocId,
    pub stage_id: DocId,
    /// Stage title
    pub title: String,
    pub deadline: NaiveDate,
    pub severity: Severity,
}

/// Scan a single project for overdue and upcoming stage deadlines
pub fn scan_project(project: &Project, today: NaiveDate, window: AlertWindow) -> Vec<Alert> {
    let mut alerts = collect(project, today, window);
    sort_alerts(&mut alerts);
    alerts
}

/// Scan many projects; the ordering is global across all of them
pub fn scan_projects<'a, I>(projects: I, today: NaiveDate, window: AlertWindow) -> Vec<Alert>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut alerts = Vec::new();
    for project in projects {
        alerts.extend(collect(project, today, window));
    }
    sort_alerts(&mut alerts);
    alerts
}

fn collect(project: &Project, today: NaiveDate, window: AlertWindow) -> Vec<Alert> {
    let horizon = today + Duration::days(window.lookahead_days as i64);
    let mut alerts = Vec::new();

    for intervention in &project.interventions {
        for stage in &intervention.stages {
            let deadline = match stage.deadline {
                Some(deadline) => deadline,
                None => continue,
            };
            let status = effective_status(stage, today);
            if status.is_completed() {
                continue;
            }
            let severity = if status == StageStatus::Delayed {
                Severity::Overdue
            } else if deadline <= horizon {
                Severity::Upcoming
            } else {
                continue;
            };
            alerts.push(Alert {
                project_id: project.id.clone(),
                project_title: project.title.clone(),
                intervention_id: intervention.id.clone(),
                stage_id: stage.id.clone(),
                title: stage.title.clone(),
                deadline,
                severity,
            });
        }
    }

    alerts
}

fn sort_alerts(alerts: &mut [Alert]) {
    alerts.sort_by(|a, b| {
        a.deadline
            .cmp(&b.deadline)
            .then_with(|| a.project_title.cmp(&b.project_title))
            .then_with(|| a.title.cmp(&b.title))
    });
}
