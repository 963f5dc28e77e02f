//! Offer contract

use nestor_core::ValidationErrors;
use nestor_models::Offer;

use crate::base::{merge_derive_errors, validate_reference, Contract, ValidationResult};

/// Contract for creating and updating offers
#[derive(Debug, Default)]
pub struct OfferContract;

impl OfferContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_items(&self, offer: &Offer, errors: &mut ValidationErrors) {
        for (index, item) in offer.items.iter().enumerate() {
            if let Some(quantity) = item.quantity {
                if quantity < 0.0 {
                    errors.add(format!("items[{}].quantity", index), "must not be negative");
                }
            }
            if item.unit_price <= 0.0 {
                errors.add(
                    format!("items[{}].unit_price", index),
                    "must be greater than zero",
                );
            }
        }
    }
}

impl Contract<Offer> for OfferContract {
    fn validate(&self, offer: &Offer) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        merge_derive_errors(offer, &mut errors);
        validate_reference("supplier_id", &offer.supplier_id, &mut errors);
        self.validate_items(offer, &mut errors);

        errors.into_result()
    }
}
