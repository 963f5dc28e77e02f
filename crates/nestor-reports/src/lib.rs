//! # nestor-reports
//!
//! Report generation over enriched project views. An engine receives a
//! compact project digest and produces tagged output a client renders as
//! prose or as a chart. The default engine is a deterministic template;
//! the trait seam exists so a hosted model can slot in behind the same
//! request shape.

pub mod context;
pub mod engine;
pub mod tags;
pub mod template;

pub use context::{InterventionSummary, ProjectContext};
pub use engine::{
    engine_from_name, ChartRow, ReportEngine, ReportError, ReportKind, ReportOutput, ReportRequest,
};
pub use tags::suggest_tags;
pub use template::TemplateReportEngine;
