//! HTTP handlers
//!
//! Thin adapters: extract, delegate to a service, map the outcome onto a
//! status code. All date-dependent derivation is pinned to the server's
//! current UTC date at the moment the request is handled.

pub mod alerts;
pub mod contacts;
pub mod custom_lists;
pub mod dashboard;
pub mod master_interventions;
pub mod offers;
pub mod projects;
pub mod reports;

use chrono::{NaiveDate, Utc};

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
