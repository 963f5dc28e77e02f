//! Report generation handler

use axum::extract::{Path, State};
use axum::Json;
use nestor_reports::{ReportKind, ReportOutput};
use nestor_services::ReportService;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::today;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportDto {
    #[serde(default)]
    pub kind: ReportKind,

    /// Free-text steering hint passed through to the engine
    #[serde(default)]
    pub prompt: String,
}

pub async fn generate_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<GenerateReportDto>,
) -> ApiResult<Json<ReportOutput>> {
    let service = ReportService::new(
        state.projects(),
        state.contacts(),
        state.custom_lists(),
        state.list_items(),
        state.report_engine.clone(),
    );
    let output = service.generate(&id, dto.kind, dto.prompt, today()).await?;
    Ok(Json(output))
}
