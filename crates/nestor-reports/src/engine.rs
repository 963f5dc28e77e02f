//! Engine seam and wire types

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::ProjectContext;
use crate::template::TemplateReportEngine;

/// Report generation error
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("report engine {engine} failed: {message}")]
    Engine {
        engine: &'static str,
        message: String,
    },

    #[error("unknown report engine: {0}")]
    UnknownEngine(String),
}

/// What kind of report the client asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Prose summary of the project's state
    #[default]
    Narrative,

    /// Budget breakdown rows for a bar chart
    BudgetChart,
}

/// A report request as assembled by the report service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    #[serde(default)]
    pub kind: ReportKind,

    /// Free-text steering hint from the user, may be empty
    #[serde(default)]
    pub prompt: String,

    pub context: ProjectContext,
}

/// One bar in a chart report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRow {
    pub label: String,
    pub value: f64,
}

/// Engine output, tagged so clients branch on `type` instead of sniffing
/// fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ReportOutput {
    #[serde(rename_all = "camelCase")]
    Text { body: String },

    #[serde(rename_all = "camelCase")]
    Chart { title: String, rows: Vec<ChartRow> },
}

/// A report engine turns a request into tagged output
#[async_trait]
pub trait ReportEngine: Send + Sync + std::fmt::Debug {
    async fn generate(&self, request: &ReportRequest) -> Result<ReportOutput, ReportError>;

    /// Engine name as selected by configuration
    fn name(&self) -> &'static str;
}

/// Resolve the engine named in configuration to an implementation
pub fn engine_from_name(name: &str) -> Result<Arc<dyn ReportEngine>, ReportError> {
    match name {
        "template" => Ok(Arc::new(TemplateReportEngine::new())),
        other => Err(ReportError::UnknownEngine(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_is_tagged() {
        let text = serde_json::to_value(ReportOutput::Text {
            body: "All good".into(),
        })
        .unwrap();
        assert_eq!(text["type"], "text");
        assert_eq!(text["body"], "All good");

        let chart = serde_json::to_value(ReportOutput::Chart {
            title: "Budget".into(),
            rows: vec![ChartRow {
                label: "Insulation".into(),
                value: 500.0,
            }],
        })
        .unwrap();
        assert_eq!(chart["type"], "chart");
        assert_eq!(chart["rows"][0]["label"], "Insulation");
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&ReportKind::BudgetChart).unwrap(),
            r#""budget-chart""#
        );
        let kind: ReportKind = serde_json::from_str(r#""narrative""#).unwrap();
        assert_eq!(kind, ReportKind::Narrative);
    }

    #[test]
    fn test_engine_lookup() {
        let engine = engine_from_name("template").unwrap();
        assert_eq!(engine.name(), "template");

        let err = engine_from_name("gpt-9").unwrap_err();
        assert!(err.to_string().contains("gpt-9"));
    }
}
