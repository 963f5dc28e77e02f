//! Custom list contracts

use nestor_core::ValidationErrors;
use nestor_models::{CustomList, CustomListItem};

use crate::base::{merge_derive_errors, validate_reference, Contract, ValidationResult};

/// Contract for custom lists
#[derive(Debug, Default)]
pub struct CustomListContract;

impl CustomListContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<CustomList> for CustomListContract {
    fn validate(&self, list: &CustomList) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        merge_derive_errors(list, &mut errors);
        errors.into_result()
    }
}

/// Contract for custom list items
#[derive(Debug, Default)]
pub struct CustomListItemContract;

impl CustomListItemContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<CustomListItem> for CustomListItemContract {
    fn validate(&self, item: &CustomListItem) -> ValidationResult {
        let mut errors = ValidationErrors::new();
        merge_derive_errors(item, &mut errors);
        validate_reference("list_id", &item.list_id, &mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_list_title() {
        let list = CustomList::new("");
        let result = CustomListContract::new().validate(&list);
        assert!(result.unwrap_err().has_error("title"));
    }

    #[test]
    fn test_item_requires_owning_list() {
        let item = CustomListItem::new("", "photovoltaics");
        let result = CustomListItemContract::new().validate(&item);
        assert!(result.unwrap_err().has_error("list_id"));
    }

    #[test]
    fn test_valid_item() {
        let item = CustomListItem::new("cl-tags", "photovoltaics");
        assert!(CustomListItemContract::new().validate(&item).is_ok());
    }
}
