//! Offer handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nestor_core::{Paginated, PaginationParams};
use nestor_models::{CreateOfferDto, Offer, UpdateOfferDto};
use nestor_services::{CreateOfferService, DeleteOfferService, UpdateOfferService};

use crate::error::{validated, ApiResult};
use crate::state::AppState;

pub async fn list_offers(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Json<Paginated<Offer>>> {
    let offers = state.offers().list().await?;
    Ok(Json(Paginated::from_vec(offers, pagination)))
}

pub async fn get_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Offer>> {
    let offer = state.offers().require(&id).await?;
    Ok(Json(offer))
}

pub async fn create_offer(
    State(state): State<AppState>,
    Json(dto): Json<CreateOfferDto>,
) -> ApiResult<impl IntoResponse> {
    let outcome = CreateOfferService::new(state.offers(), state.contacts(), state.projects())
        .call(dto)
        .await?;
    let offer = validated(outcome)?;
    Ok((StatusCode::CREATED, Json(offer)))
}

pub async fn update_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateOfferDto>,
) -> ApiResult<Json<Offer>> {
    let outcome = UpdateOfferService::new(state.offers(), state.contacts(), state.projects())
        .call(&id, dto)
        .await?;
    let offer = validated(outcome)?;
    Ok(Json(offer))
}

pub async fn delete_offer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let outcome = DeleteOfferService::new(state.offers()).call(&id).await?;
    validated(outcome)?;
    Ok(StatusCode::NO_CONTENT)
}
