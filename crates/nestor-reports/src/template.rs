//! Deterministic template engine
//!
//! Renders reports from the context alone, with no calls out of process.
//! Serves as the offline default and as the fixture engine in tests.

use async_trait::async_trait;
use tracing::debug;

use crate::context::ProjectContext;
use crate::engine::{ChartRow, ReportEngine, ReportError, ReportKind, ReportOutput, ReportRequest};

#[derive(Debug, Default)]
pub struct TemplateReportEngine;

impl TemplateReportEngine {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportEngine for TemplateReportEngine {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportOutput, ReportError> {
        debug!(kind = ?request.kind, project = %request.context.title, "rendering template report");

        let output = match request.kind {
            ReportKind::Narrative => ReportOutput::Text {
                body: render_narrative(&request.context, &request.prompt),
            },
            ReportKind::BudgetChart => ReportOutput::Chart {
                title: format!("Budget by intervention: {}", request.context.title),
                rows: request
                    .context
                    .interventions
                    .iter()
                    .map(|intervention| ChartRow {
                        label: intervention.title.clone(),
                        value: intervention.cost,
                    })
                    .collect(),
            },
        };

        Ok(output)
    }

    fn name(&self) -> &'static str {
        "template"
    }
}

fn render_narrative(context: &ProjectContext, prompt: &str) -> String {
    let mut lines = Vec::new();

    let status = context.status.replace('-', " ");
    match &context.client_name {
        Some(client) => lines.push(format!(
            "Project \"{}\" for {} is {}. The estimated budget is {:.2} EUR and overall progress stands at {:.1}%.",
            context.title, client, status, context.total_budget, context.total_progress,
        )),
        None => lines.push(format!(
            "Project \"{}\" is {}. The estimated budget is {:.2} EUR and overall progress stands at {:.1}%.",
            context.title, status, context.total_budget, context.total_progress,
        )),
    }

    if !context.interventions.is_empty() {
        lines.push(String::new());
        lines.push("Interventions:".to_string());
        for intervention in &context.interventions {
            lines.push(format!(
                "- {}: {:.2} EUR, {:.1}% complete ({} of {} stages)",
                intervention.title,
                intervention.cost,
                intervention.progress,
                intervention.completed_stages,
                intervention.stage_count,
            ));
        }
    }

    if !prompt.trim().is_empty() {
        lines.push(String::new());
        lines.push(format!("Requested focus: {}", prompt.trim()));
    }

    lines.join("\n")
}
