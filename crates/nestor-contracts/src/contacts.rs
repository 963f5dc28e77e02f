//! Contact contract

use nestor_core::ValidationErrors;
use nestor_models::Contact;
use regex::Regex;
use std::sync::LazyLock;

use crate::base::{merge_derive_errors, Contract, ValidationResult};

/// Greek tax identification number (ΑΦΜ): exactly nine digits
static VAT_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{9}$").unwrap());

/// Contract for creating and updating contacts
#[derive(Debug, Default)]
pub struct ContactContract;

impl ContactContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_vat_number(&self, vat_number: Option<&str>, errors: &mut ValidationErrors) {
        if let Some(vat) = vat_number {
            if !VAT_PATTERN.is_match(vat) {
                errors.add("vat_number", "must be a nine-digit tax number");
            }
        }
    }
}

impl Contract<Contact> for ContactContract {
    fn validate(&self, contact: &Contact) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        merge_derive_errors(contact, &mut errors);
        self.validate_vat_number(contact.vat_number.as_deref(), &mut errors);

        errors.into_result()
    }
}
