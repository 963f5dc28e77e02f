//! # nestor-services
//!
//! Orchestration between the API and the store. Write services assemble a
//! document from a DTO, run the matching contract plus the referential
//! checks only the store can answer, and persist. Read services fetch and
//! hand over to the metrics crate for derivation.
//!
//! Every service receives its store handles at construction; nothing here
//! reaches for process-global state.

pub mod alerts;
pub mod contacts;
pub mod custom_lists;
pub mod dashboard;
pub mod offers;
pub mod projects;
pub mod reports;
pub mod work_orders;

pub use alerts::AlertFeedService;
pub use contacts::{CreateContactService, DeleteContactService, UpdateContactService};
pub use custom_lists::{
    AddListItemService, CreateCustomListService, DeleteCustomListService, RemoveListItemService,
};
pub use dashboard::{CategoryBudget, DashboardService, DashboardSummary, StatusCount};
pub use offers::{CreateOfferService, DeleteOfferService, UpdateOfferService};
pub use projects::{
    CreateProjectService, DeleteProjectService, StageTransition, StageTransitionService,
    UpdateProjectService,
};
pub use reports::ReportService;
pub use work_orders::{ContactRef, WorkOrder, WorkOrderService};
