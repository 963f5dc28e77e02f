//! Master intervention catalog model

use chrono::{DateTime, Utc};
use nestor_core::{DocId, Document, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::lenient;

/// Catalog template for a type of subsidized renovation work
///
/// The catalog is seed-managed and read-only over the API; projects
/// instantiate entries as `ProjectIntervention`s.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MasterIntervention {
    #[serde(default)]
    pub id: DocId,

    /// Programme code ("THERM-01")
    #[validate(length(min = 1, max = 50))]
    pub code: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    /// Budget chart grouping ("insulation", "heating", "windows")
    pub category: Option<String>,

    /// Default unit of measure for line items
    pub unit: Option<String>,

    /// Subsidy ceiling per unit, when the programme caps it
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub max_unit_price: Option<f64>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for MasterIntervention {
    fn default() -> Self {
        Self {
            id: DocId::new(),
            code: String::new(),
            title: String::new(),
            category: None,
            unit: None,
            max_unit_price: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for MasterIntervention {
    fn id(&self) -> &DocId {
        &self.id
    }
}

impl Timestamped for MasterIntervention {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Document for MasterIntervention {
    const COLLECTION: &'static str = "masterInterventions";
    const TYPE_NAME: &'static str = "MasterIntervention";
}

impl MasterIntervention {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    /// Grouping key for budget charts
    pub fn category_key(&self) -> &str {
        self.category.as_deref().unwrap_or("other")
    }
}
