//! Base contract system
//!
//! Contracts validate a fully-assembled document before it reaches the
//! store. They collect every violation instead of failing fast, so a form
//! round-trips all of its problems in one response. The read path stays
//! lenient; only writes pass through here.

use nestor_core::ValidationErrors;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T>: Send + Sync {
    /// Validate the entity
    fn validate(&self, entity: &T) -> ValidationResult;
}

/// Run the `validator` derive on an entity and fold the outcome into the
/// shared error collection. Error keys use struct field paths, with nested
/// collections indexed ("interventions[0].title").
pub fn merge_derive_errors<T: validator::Validate>(entity: &T, errors: &mut ValidationErrors) {
    if let Err(derive_errors) = entity.validate() {
        errors.merge(derive_errors.into());
    }
}

/// Require a non-empty reference field
pub fn validate_reference(field: impl Into<String>, value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(field, "can't be blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn test_merge_derive_errors() {
        let mut errors = ValidationErrors::new();
        merge_derive_errors(&Named { name: String::new() }, &mut errors);
        assert!(errors.has_error("name"));
    }

    #[test]
    fn test_validate_reference() {
        let mut errors = ValidationErrors::new();
        validate_reference("contact_id", "  ", &mut errors);
        validate_reference("supplier_id", "c-1", &mut errors);
        assert!(errors.has_error("contact_id"));
        assert!(!errors.has_error("supplier_id"));
    }
}
