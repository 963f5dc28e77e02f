//! Project handlers
//!
//! Every project leaving this module is the enriched view: derived stage
//! statuses, rolled-up budget and progress, computed for today.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nestor_core::{Paginated, PaginationParams};
use nestor_metrics::{enrich_project, ProjectView};
use nestor_models::{CreateProjectDto, Offer, UpdateProjectDto};
use nestor_services::{
    CreateProjectService, DeleteProjectService, StageTransition, StageTransitionService,
    UpdateProjectService, WorkOrder, WorkOrderService,
};

use crate::error::{validated, ApiResult};
use crate::handlers::today;
use crate::state::AppState;

pub async fn list_projects(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Json<Paginated<ProjectView>>> {
    let scan_date = today();
    let views: Vec<ProjectView> = state
        .projects()
        .list()
        .await?
        .iter()
        .map(|project| enrich_project(project, scan_date))
        .collect();
    Ok(Json(Paginated::from_vec(views, pagination)))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProjectView>> {
    let project = state.projects().require(&id).await?;
    Ok(Json(enrich_project(&project, today())))
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(dto): Json<CreateProjectDto>,
) -> ApiResult<impl IntoResponse> {
    let outcome = CreateProjectService::new(state.projects(), state.contacts())
        .call(dto)
        .await?;
    let project = validated(outcome)?;
    Ok((
        StatusCode::CREATED,
        Json(enrich_project(&project, today())),
    ))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateProjectDto>,
) -> ApiResult<Json<ProjectView>> {
    let outcome = UpdateProjectService::new(
        state.projects(),
        state.contacts(),
        state.master_interventions(),
    )
    .call(&id, dto)
    .await?;
    let project = validated(outcome)?;
    Ok(Json(enrich_project(&project, today())))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let outcome = DeleteProjectService::new(state.projects(), state.offers())
        .call(&id)
        .await?;
    validated(outcome)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn transition_stage(
    State(state): State<AppState>,
    Path((id, intervention_id, stage_id)): Path<(String, String, String)>,
    Json(transition): Json<StageTransition>,
) -> ApiResult<Json<ProjectView>> {
    let outcome = StageTransitionService::new(state.projects())
        .call(&id, &intervention_id, &stage_id, transition)
        .await?;
    let project = validated(outcome)?;
    Ok(Json(enrich_project(&project, today())))
}

pub async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkOrder>> {
    let order = WorkOrderService::new(state.projects(), state.contacts())
        .build(&id, today())
        .await?;
    Ok(Json(order))
}

/// Offers attached to one project
pub async fn project_offers(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<Offer>>> {
    state.projects().require(&id).await?;
    let offers = state.offers().for_project(&id).await?;
    Ok(Json(offers))
}
