//! # nestor-metrics
//!
//! The derived-metrics engine: pure, synchronous computations over
//! already-fetched project documents. Nothing here touches the store,
//! blocks, or returns errors; malformed input degrades to zeros and empty
//! sequences at the model boundary instead of failing here.
//!
//! Every function takes the scan date as an explicit parameter, so results
//! are reproducible and safe to compute concurrently.

pub mod alert;
pub mod facade;
pub mod progress;
pub mod rollup;
pub mod status;

pub use alert::{scan_project, scan_projects, Alert, AlertWindow, Severity};
pub use facade::{derived_status, enrich_project, InterventionView, ProjectView, StageView};
pub use progress::{intervention_progress, project_progress};
pub use rollup::{
    intervention_cost, line_total, offer_item_total, offer_total, project_budget,
};
pub use status::effective_status;
