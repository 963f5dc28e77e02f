//! Master intervention catalogue, read-only over the API

use axum::extract::{Path, Query, State};
use axum::Json;
use nestor_core::{Paginated, PaginationParams};
use nestor_models::MasterIntervention;

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_master_interventions(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Json<Paginated<MasterIntervention>>> {
    let masters = state.master_interventions().list().await?;
    Ok(Json(Paginated::from_vec(masters, pagination)))
}

pub async fn get_master_intervention(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MasterIntervention>> {
    let master = state.master_interventions().require(&id).await?;
    Ok(Json(master))
}
