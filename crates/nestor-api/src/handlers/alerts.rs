//! Deadline alert feed

use axum::extract::{Query, State};
use axum::Json;
use nestor_metrics::{Alert, AlertWindow};
use nestor_services::AlertFeedService;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::handlers::today;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertQuery {
    /// Overrides the configured lookahead for this request
    pub lookahead_days: Option<u32>,
}

pub async fn list_alerts(
    State(state): State<AppState>,
    Query(query): Query<AlertQuery>,
) -> ApiResult<Json<Vec<Alert>>> {
    let window = query
        .lookahead_days
        .map(AlertWindow::days)
        .unwrap_or_else(|| state.alert_window());

    let alerts = AlertFeedService::new(state.projects(), window)
        .feed(today())
        .await?;
    Ok(Json(alerts))
}
