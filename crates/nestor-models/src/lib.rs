//! # nestor-models
//!
//! Domain models for NESTOR eco.
//!
//! Every struct here is the validated shape a document takes once it has
//! crossed the store boundary; nested collections default to empty and cost
//! fields deserialize leniently so a partially-seeded document still loads.

pub use nestor_core::{DocId, Document, Identifiable, Timestamped};

pub mod contact;
pub mod custom_list;
pub mod intervention;
pub mod lenient;
pub mod master_intervention;
pub mod offer;
pub mod project;
pub mod stage;

// Re-exports for convenience
pub use contact::{Contact, ContactRole, CreateContactDto, UpdateContactDto};
pub use custom_list::{
    CreateCustomListDto, CreateCustomListItemDto, CustomList, CustomListItem,
};
pub use intervention::{ProjectIntervention, SubIntervention};
pub use master_intervention::MasterIntervention;
pub use offer::{CreateOfferDto, Offer, OfferItem, UpdateOfferDto};
pub use project::{CreateProjectDto, Project, ProjectStatus, UpdateProjectDto};
pub use stage::{Stage, StageStatus};
