//! Contact model

use chrono::{DateTime, Utc};
use nestor_core::{DocId, Document, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Role of a contact in the subsidy workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactRole {
    #[default]
    Client,
    Supplier,
    Technician,
    Other,
}

impl ContactRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Supplier => "supplier",
            Self::Technician => "technician",
            Self::Other => "other",
        }
    }
}

/// A person or company involved in projects
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default)]
    pub id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub role: ContactRole,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    /// Greek tax identification number (ΑΦΜ), nine digits
    pub vat_number: Option<String>,

    /// Explicit avatar image; when absent the API falls back to a
    /// gravatar-style hash of the email
    pub avatar_url: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            id: DocId::new(),
            name: String::new(),
            role: ContactRole::Client,
            email: None,
            phone: None,
            vat_number: None,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for Contact {
    fn id(&self) -> &DocId {
        &self.id
    }
}

impl Timestamped for Contact {
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

impl Document for Contact {
    const COLLECTION: &'static str = "contacts";
    const TYPE_NAME: &'static str = "Contact";
}

impl Contact {
    pub fn new(name: impl Into<String>, role: ContactRole) -> Self {
        Self {
            name: name.into(),
            role,
            ..Default::default()
        }
    }

    pub fn is_supplier(&self) -> bool {
        self.role == ContactRole::Supplier
    }
}

/// DTO for creating a contact
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub role: Option<ContactRole>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub vat_number: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<CreateContactDto> for Contact {
    fn from(dto: CreateContactDto) -> Self {
        Self {
            name: dto.name,
            role: dto.role.unwrap_or_default(),
            email: dto.email,
            phone: dto.phone,
            vat_number: dto.vat_number,
            avatar_url: dto.avatar_url,
            ..Default::default()
        }
    }
}

/// DTO for updating a contact
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub role: Option<ContactRole>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,
    pub vat_number: Option<String>,
    pub avatar_url: Option<String>,
}

impl UpdateContactDto {
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(ref name) = self.name {
            contact.name = name.clone();
        }
        if let Some(role) = self.role {
            contact.role = role;
        }
        if let Some(ref email) = self.email {
            contact.email = Some(email.clone());
        }
        if let Some(ref phone) = self.phone {
            contact.phone = Some(phone.clone());
        }
        if let Some(ref vat) = self.vat_number {
            contact.vat_number = Some(vat.clone());
        }
        if let Some(ref avatar) = self.avatar_url {
            contact.avatar_url = Some(avatar.clone());
        }
    }
}
