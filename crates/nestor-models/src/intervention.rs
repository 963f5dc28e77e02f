//! Intervention models
//!
//! A `ProjectIntervention` instantiates a master-catalog entry inside a
//! project. Its scope of work is priced by `SubIntervention` line items and
//! tracked through `Stage` records.

use nestor_core::DocId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::lenient;
use crate::stage::Stage;

/// Costed line item within an intervention
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubIntervention {
    #[serde(default)]
    pub id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Unit of measure ("m²", "kW", "pcs")
    pub unit: Option<String>,

    /// Missing quantity marks a draft line; it prices as zero
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub quantity: Option<f64>,

    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub unit_price: f64,
}

impl SubIntervention {
    pub fn new(title: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            title: title.into(),
            quantity: Some(quantity),
            unit_price,
            ..Default::default()
        }
    }
}

/// An intervention instantiated from the master catalog within a project
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIntervention {
    #[serde(default)]
    pub id: DocId,

    /// Master catalog entry this intervention instantiates
    #[serde(default)]
    pub master_id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    #[validate]
    pub stages: Vec<Stage>,

    #[serde(default)]
    #[validate]
    pub sub_interventions: Vec<SubIntervention>,

    /// Explicit total that replaces the line-item sum when set
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cost_override: Option<f64>,
}

impl ProjectIntervention {
    pub fn new(master_id: impl Into<DocId>, title: impl Into<String>) -> Self {
        Self {
            master_id: master_id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_deserializes() {
        // A draft intervention straight from a form: no stages, no lines yet
        let intervention: ProjectIntervention =
            serde_json::from_str(r#"{"title": "Roof insulation", "masterId": "mi-ins"}"#)
                .unwrap();
        assert_eq!(intervention.title, "Roof insulation");
        assert!(intervention.stages.is_empty());
        assert!(intervention.sub_interventions.is_empty());
        assert!(intervention.cost_override.is_none());
    }

    #[test]
    fn test_string_costs_coerce() {
        let line: SubIntervention = serde_json::from_str(
            r#"{"title": "Mineral wool", "quantity": "40", "unitPrice": "12.5"}"#,
        )
        .unwrap();
        assert_eq!(line.quantity, Some(40.0));
        assert_eq!(line.unit_price, 12.5);
    }
}
