//! Project contract
//!
//! Validates the whole nested document: the project itself, every
//! intervention, its stages, and its costed line items. Reference
//! existence (owner contact, master catalog entries) is checked by the
//! services, which can reach the store.

use nestor_core::ValidationErrors;
use nestor_models::{Project, ProjectIntervention};

use crate::base::{merge_derive_errors, validate_reference, Contract, ValidationResult};

/// Contract for creating and updating projects
#[derive(Debug, Default)]
pub struct ProjectContract;

impl ProjectContract {
    pub fn new() -> Self {
        Self
    }

    fn validate_intervention(
        &self,
        index: usize,
        intervention: &ProjectIntervention,
        errors: &mut ValidationErrors,
    ) {
        let prefix = format!("interventions[{}]", index);

        validate_reference(
            format!("{}.master_id", prefix),
            &intervention.master_id,
            errors,
        );

        for (j, stage) in intervention.stages.iter().enumerate() {
            if !stage.status.storable() {
                errors.add(
                    format!("{}.stages[{}].status", prefix, j),
                    "is derived at read time and cannot be stored",
                );
            }
        }

        for (j, item) in intervention.sub_interventions.iter().enumerate() {
            if let Some(quantity) = item.quantity {
                if quantity < 0.0 {
                    errors.add(
                        format!("{}.sub_interventions[{}].quantity", prefix, j),
                        "must not be negative",
                    );
                }
            }
            if item.unit_price <= 0.0 {
                errors.add(
                    format!("{}.sub_interventions[{}].unit_price", prefix, j),
                    "must be greater than zero",
                );
            }
        }

        if let Some(cost) = intervention.cost_override {
            if cost < 0.0 {
                errors.add(format!("{}.cost_override", prefix), "must not be negative");
            }
        }
    }
}

impl Contract<Project> for ProjectContract {
    fn validate(&self, project: &Project) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        merge_derive_errors(project, &mut errors);
        validate_reference("contact_id", &project.contact_id, &mut errors);

        for (index, intervention) in project.interventions.iter().enumerate() {
            self.validate_intervention(index, intervention, &mut errors);
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_models::{Stage, StageStatus, SubIntervention};

    fn valid_project() -> Project {
        let mut intervention = ProjectIntervention::new("mi-ins", "Roof insulation");
        intervention.stages = vec![Stage::new("Survey")];
        intervention.sub_interventions = vec![SubIntervention::new("Mineral wool", 40.0, 12.5)];

        let mut project = Project::new("Athens retrofit", "c-1");
        project.interventions = vec![intervention];
        project
    }

    #[test]
    fn test_valid_project() {
        assert!(ProjectContract::new().validate(&valid_project()).is_ok());
    }

    #[test]
    fn test_missing_owner() {
        let mut project = valid_project();
        project.contact_id = String::new();

        let result = ProjectContract::new().validate(&project);
        assert!(result.unwrap_err().has_error("contact_id"));
    }

    #[test]
    fn test_derived_status_cannot_be_stored() {
        let mut project = valid_project();
        project.interventions[0].stages[0].status = StageStatus::Delayed;

        let result = ProjectContract::new().validate(&project);
        assert!(result
            .unwrap_err()
            .has_error("interventions[0].stages[0].status"));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let mut project = valid_project();
        project.interventions[0].sub_interventions[0].quantity = Some(-1.0);

        let result = ProjectContract::new().validate(&project);
        assert!(result
            .unwrap_err()
            .has_error("interventions[0].sub_interventions[0].quantity"));
    }

    #[test]
    fn test_zero_unit_price_rejected_on_write() {
        let mut project = valid_project();
        project.interventions[0].sub_interventions[0].unit_price = 0.0;

        let result = ProjectContract::new().validate(&project);
        assert!(result
            .unwrap_err()
            .has_error("interventions[0].sub_interventions[0].unit_price"));
    }

    #[test]
    fn test_missing_master_reference_rejected() {
        let mut project = valid_project();
        project.interventions[0].master_id = String::new();

        let result = ProjectContract::new().validate(&project);
        assert!(result.unwrap_err().has_error("interventions[0].master_id"));
    }

    #[test]
    fn test_nested_blank_title_reported_with_path() {
        let mut project = valid_project();
        project.interventions[0].title = String::new();

        let result = ProjectContract::new().validate(&project);
        assert!(result.unwrap_err().has_error("interventions[0].title"));
    }
}
