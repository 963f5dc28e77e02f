//! Dashboard handler

use axum::extract::State;
use axum::Json;
use nestor_services::{DashboardService, DashboardSummary};

use crate::error::ApiResult;
use crate::handlers::today;
use crate::state::AppState;

pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Json<DashboardSummary>> {
    let summary = DashboardService::new(
        state.projects(),
        state.master_interventions(),
        state.alert_window(),
    )
    .summary(today())
    .await?;
    Ok(Json(summary))
}
