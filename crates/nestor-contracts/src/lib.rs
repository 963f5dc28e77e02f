//! # nestor-contracts
//!
//! Write-path validation contracts. Services run the matching contract on
//! a fully-assembled document before every store write; the read path
//! deliberately stays lenient.

pub mod base;
pub mod contacts;
pub mod custom_lists;
pub mod offers;
pub mod projects;

pub use base::{Contract, ValidationResult};
pub use contacts::ContactContract;
pub use custom_lists::{CustomListContract, CustomListItemContract};
pub use offers::OfferContract;
pub use projects::ProjectContract;
