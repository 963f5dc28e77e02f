//! API routes

use axum::extract::State;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::handlers::{
    alerts, contacts, custom_lists, dashboard, master_interventions, offers, projects, reports,
};
use crate::state::AppState;

/// Create the complete API router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_router())
}

fn api_v1_router() -> Router<AppState> {
    Router::new()
        .route("/", get(api_root))
        .nest("/contacts", contacts_router())
        .nest("/projects", projects_router())
        .nest("/offers", offers_router())
        .nest("/master-interventions", master_interventions_router())
        .nest("/custom-lists", custom_lists_router())
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/alerts", get(alerts::list_alerts))
}

fn contacts_router() -> Router<AppState> {
    Router::new()
        .route("/", get(contacts::list_contacts))
        .route("/", post(contacts::create_contact))
        .route("/:id", get(contacts::get_contact))
        .route("/:id", patch(contacts::update_contact))
        .route("/:id", delete(contacts::delete_contact))
}

fn projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list_projects))
        .route("/", post(projects::create_project))
        .route("/:id", get(projects::get_project))
        .route("/:id", patch(projects::update_project))
        .route("/:id", delete(projects::delete_project))
        .route(
            "/:id/interventions/:intervention_id/stages/:stage_id/transition",
            post(projects::transition_stage),
        )
        .route("/:id/work-order", get(projects::get_work_order))
        .route("/:id/offers", get(projects::project_offers))
        .route("/:id/reports", post(reports::generate_report))
}

fn offers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(offers::list_offers))
        .route("/", post(offers::create_offer))
        .route("/:id", get(offers::get_offer))
        .route("/:id", patch(offers::update_offer))
        .route("/:id", delete(offers::delete_offer))
}

fn master_interventions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(master_interventions::list_master_interventions))
        .route("/:id", get(master_interventions::get_master_intervention))
}

fn custom_lists_router() -> Router<AppState> {
    Router::new()
        .route("/", get(custom_lists::list_custom_lists))
        .route("/", post(custom_lists::create_custom_list))
        .route("/:id", get(custom_lists::get_custom_list))
        .route("/:id", delete(custom_lists::delete_custom_list))
        .route("/:id/items", post(custom_lists::add_list_item))
        .route("/:id/items/:item_id", delete(custom_lists::remove_list_item))
        .route("/:id/suggest-tags", post(custom_lists::suggest_tags))
}

async fn api_root(State(state): State<AppState>) -> Json<ApiRoot> {
    Json(ApiRoot {
        instance_name: state.config.instance.name.clone(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRoot {
    instance_name: String,
    version: &'static str,
}
