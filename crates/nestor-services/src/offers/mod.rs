//! Offer services

mod create;
mod delete;
mod update;

pub use create::CreateOfferService;
pub use delete::DeleteOfferService;
pub use update::UpdateOfferService;
