//! Contact handlers

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use nestor_core::{Paginated, PaginationParams};
use nestor_models::{Contact, CreateContactDto, UpdateContactDto};
use nestor_services::{CreateContactService, DeleteContactService, UpdateContactService};

use crate::avatar;
use crate::error::{validated, ApiResult};
use crate::state::AppState;

pub async fn list_contacts(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Json<Paginated<Contact>>> {
    let contacts: Vec<Contact> = state
        .contacts()
        .list()
        .await?
        .into_iter()
        .map(avatar::with_fallback)
        .collect();
    Ok(Json(Paginated::from_vec(contacts, pagination)))
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Contact>> {
    let contact = state.contacts().require(&id).await?;
    Ok(Json(avatar::with_fallback(contact)))
}

pub async fn create_contact(
    State(state): State<AppState>,
    Json(dto): Json<CreateContactDto>,
) -> ApiResult<impl IntoResponse> {
    let outcome = CreateContactService::new(state.contacts()).call(dto).await?;
    let contact = validated(outcome)?;
    Ok((StatusCode::CREATED, Json(avatar::with_fallback(contact))))
}

pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateContactDto>,
) -> ApiResult<Json<Contact>> {
    let outcome = UpdateContactService::new(state.contacts())
        .call(&id, dto)
        .await?;
    let contact = validated(outcome)?;
    Ok(Json(avatar::with_fallback(contact)))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let outcome = DeleteContactService::new(state.contacts(), state.projects(), state.offers())
        .call(&id)
        .await?;
    validated(outcome)?;
    Ok(StatusCode::NO_CONTENT)
}
