//! Offer model

use chrono::{DateTime, Utc};
use nestor_core::{DocId, Document, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::lenient;

/// Priced line on a supplier quotation
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OfferItem {
    #[serde(default)]
    pub id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub unit: Option<String>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub quantity: Option<f64>,

    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub unit_price: f64,
}

/// A supplier's priced quotation, optionally tied to a project
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(default)]
    pub id: DocId,

    /// Supplier contact
    #[serde(default)]
    pub supplier_id: DocId,

    /// Target project; unset while the offer is unassigned
    pub project_id: Option<DocId>,

    #[serde(default)]
    #[validate]
    pub items: Vec<OfferItem>,

    pub notes: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Offer {
    fn default() -> Self {
        Self {
            id: DocId::new(),
            supplier_id: DocId::new(),
            project_id: None,
            items: Vec::new(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for Offer {
    fn id(&self) -> &DocId {
        &self.id
    }
}

impl Timestamped for Offer {
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

impl Document for Offer {
    const COLLECTION: &'static str = "offers";
    const TYPE_NAME: &'static str = "Offer";
}

impl Offer {
    pub fn new(supplier_id: impl Into<DocId>) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            ..Default::default()
        }
    }

    /// Detach the offer from its target project
    pub fn detach(&mut self) {
        self.project_id = None;
    }
}

/// DTO for creating an offer
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOfferDto {
    pub supplier_id: DocId,
    pub project_id: Option<DocId>,

    #[serde(default)]
    #[validate]
    pub items: Vec<OfferItem>,

    pub notes: Option<String>,
}

impl From<CreateOfferDto> for Offer {
    fn from(dto: CreateOfferDto) -> Self {
        Self {
            supplier_id: dto.supplier_id,
            project_id: dto.project_id,
            items: dto.items,
            notes: dto.notes,
            ..Default::default()
        }
    }
}

/// DTO for updating an offer
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOfferDto {
    pub supplier_id: Option<DocId>,
    pub project_id: Option<DocId>,

    #[validate]
    pub items: Option<Vec<OfferItem>>,

    pub notes: Option<String>,
}

impl UpdateOfferDto {
    pub fn apply_to(&self, offer: &mut Offer) {
        if let Some(ref supplier_id) = self.supplier_id {
            offer.supplier_id = supplier_id.clone();
        }
        if let Some(ref project_id) = self.project_id {
            offer.project_id = Some(project_id.clone());
        }
        if let Some(ref items) = self.items {
            offer.items = items.clone();
        }
        if let Some(ref notes) = self.notes {
            offer.notes = Some(notes.clone());
        }
    }
}
