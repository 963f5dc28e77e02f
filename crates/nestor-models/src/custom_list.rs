//! Custom list models
//!
//! Admin-curated enumerations (tag vocabularies) that constrain categorical
//! form fields. Items live in their own collection keyed by `list_id` and
//! are deleted transitively with the list.

use chrono::{DateTime, Utc};
use nestor_core::{DocId, Document, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// An admin-managed enumeration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomList {
    #[serde(default)]
    pub id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for CustomList {
    fn default() -> Self {
        Self {
            id: DocId::new(),
            title: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for CustomList {
    fn id(&self) -> &DocId {
        &self.id
    }
}

impl Timestamped for CustomList {
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

impl Document for CustomList {
    const COLLECTION: &'static str = "customLists";
    const TYPE_NAME: &'static str = "CustomList";
}

impl CustomList {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// A single entry in a custom list
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CustomListItem {
    #[serde(default)]
    pub id: DocId,

    /// Owning list
    #[serde(default)]
    pub list_id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub label: String,

    /// Sort position within the list
    #[serde(default)]
    pub position: i32,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for CustomListItem {
    fn default() -> Self {
        Self {
            id: DocId::new(),
            list_id: DocId::new(),
            label: String::new(),
            position: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for CustomListItem {
    fn id(&self) -> &DocId {
        &self.id
    }
}

impl Timestamped for CustomListItem {
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

impl Document for CustomListItem {
    const COLLECTION: &'static str = "customListItems";
    const TYPE_NAME: &'static str = "CustomListItem";
}

impl CustomListItem {
    pub fn new(list_id: impl Into<DocId>, label: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            label: label.into(),
            ..Default::default()
        }
    }
}

/// DTO for creating a custom list
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomListDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
}

impl From<CreateCustomListDto> for CustomList {
    fn from(dto: CreateCustomListDto) -> Self {
        CustomList::new(dto.title)
    }
}

/// DTO for adding an item to a list
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomListItemDto {
    #[validate(length(min = 1, max = 255))]
    pub label: String,

    pub position: Option<i32>,
}
