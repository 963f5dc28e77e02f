//! Custom list handlers
//!
//! Lists ship with their items on the detail endpoint; the collection
//! endpoint stays shallow.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nestor_core::{Paginated, PaginationParams};
use nestor_models::{CreateCustomListDto, CreateCustomListItemDto, CustomList, CustomListItem};
use nestor_services::{
    AddListItemService, CreateCustomListService, DeleteCustomListService, RemoveListItemService,
    ReportService,
};
use serde::{Deserialize, Serialize};

use crate::error::{validated, ApiResult};
use crate::state::AppState;

#[derive(Serialize)]
pub struct CustomListDetail {
    #[serde(flatten)]
    pub list: CustomList,
    pub items: Vec<CustomListItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestTagsDto {
    pub text: String,
}

pub async fn list_custom_lists(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Json<Paginated<CustomList>>> {
    let lists = state.custom_lists().list().await?;
    Ok(Json(Paginated::from_vec(lists, pagination)))
}

pub async fn get_custom_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CustomListDetail>> {
    let list = state.custom_lists().require(&id).await?;
    let items = state.list_items().for_list(&id).await?;
    Ok(Json(CustomListDetail { list, items }))
}

pub async fn create_custom_list(
    State(state): State<AppState>,
    Json(dto): Json<CreateCustomListDto>,
) -> ApiResult<impl IntoResponse> {
    let outcome = CreateCustomListService::new(state.custom_lists())
        .call(dto)
        .await?;
    let list = validated(outcome)?;
    Ok((StatusCode::CREATED, Json(list)))
}

pub async fn delete_custom_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let outcome = DeleteCustomListService::new(state.custom_lists(), state.list_items())
        .call(&id)
        .await?;
    validated(outcome)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn add_list_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<CreateCustomListItemDto>,
) -> ApiResult<impl IntoResponse> {
    let outcome = AddListItemService::new(state.custom_lists(), state.list_items())
        .call(&id, dto)
        .await?;
    let item = validated(outcome)?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn remove_list_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult<StatusCode> {
    let outcome = RemoveListItemService::new(state.list_items())
        .call(&id, &item_id)
        .await?;
    validated(outcome)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Match free text against the list's labels
pub async fn suggest_tags(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<SuggestTagsDto>,
) -> ApiResult<Json<Vec<String>>> {
    let service = ReportService::new(
        state.projects(),
        state.contacts(),
        state.custom_lists(),
        state.list_items(),
        state.report_engine.clone(),
    );
    let tags = service.suggest(&id, &dto.text).await?;
    Ok(Json(tags))
}
