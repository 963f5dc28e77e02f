//! Project model

use chrono::{DateTime, Utc};
use nestor_core::{DocId, Document, Identifiable, Timestamped};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::intervention::ProjectIntervention;

/// Project lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    /// Quoted but not yet commissioned
    #[default]
    Offer,
    InProgress,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::OnHold => "on-hold",
            Self::Cancelled => "cancelled",
        }
    }

    pub const ALL: [ProjectStatus; 5] = [
        Self::Offer,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
        Self::Cancelled,
    ];
}

/// A subsidy project
///
/// The stored status is a bookkeeping value; consumers should prefer the
/// derived status computed from the interventions' aggregate state.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub status: ProjectStatus,

    /// Owning client
    #[serde(default)]
    pub contact_id: DocId,

    #[serde(default)]
    #[validate]
    pub interventions: Vec<ProjectIntervention>,

    pub notes: Option<String>,

    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: DocId::new(),
            title: String::new(),
            status: ProjectStatus::Offer,
            contact_id: DocId::new(),
            interventions: Vec::new(),
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

impl Identifiable for Project {
    fn id(&self) -> &DocId {
        &self.id
    }
}

impl Timestamped for Project {
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

impl Document for Project {
    const COLLECTION: &'static str = "projects";
    const TYPE_NAME: &'static str = "Project";
}

impl Project {
    pub fn new(title: impl Into<String>, contact_id: impl Into<DocId>) -> Self {
        Self {
            title: title.into(),
            contact_id: contact_id.into(),
            ..Default::default()
        }
    }
}

/// DTO for creating a new project
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub contact_id: DocId,
    pub status: Option<ProjectStatus>,
    pub notes: Option<String>,
}

impl From<CreateProjectDto> for Project {
    fn from(dto: CreateProjectDto) -> Self {
        Self {
            title: dto.title,
            contact_id: dto.contact_id,
            status: dto.status.unwrap_or_default(),
            notes: dto.notes,
            ..Default::default()
        }
    }
}

/// DTO for updating a project
///
/// `interventions`, when present, replaces the nested sequence wholesale,
/// matching how document-store clients write nested arrays.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    pub status: Option<ProjectStatus>,
    pub contact_id: Option<DocId>,

    #[validate]
    pub interventions: Option<Vec<ProjectIntervention>>,

    pub notes: Option<String>,
}

impl UpdateProjectDto {
    /// Apply updates to a project
    pub fn apply_to(&self, project: &mut Project) {
        if let Some(ref title) = self.title {
            project.title = title.clone();
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(ref contact_id) = self.contact_id {
            project.contact_id = contact_id.clone();
        }
        if let Some(ref interventions) = self.interventions {
            project.interventions = interventions.clone();
        }
        if let Some(ref notes) = self.notes {
            project.notes = Some(notes.clone());
        }
    }
}
