//! Stage model

use chrono::NaiveDate;
use nestor_core::DocId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stage lifecycle status
///
/// `Delayed` is a display status derived from the deadline at read time;
/// the write-path contracts reject storing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Delayed,
}

impl StageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Delayed => "delayed",
        }
    }

    /// Forward position in the lifecycle, used by the transition check.
    /// `Delayed` shares the in-progress rank; it never occurs stored.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InProgress | Self::Delayed => 1,
            Self::Completed => 2,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether a document may be stored with this status
    pub fn storable(&self) -> bool {
        !matches!(self, Self::Delayed)
    }
}

/// A tracked execution step within an intervention
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[serde(default)]
    pub id: DocId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[serde(default)]
    pub status: StageStatus,

    /// Calendar deadline; a stage without one is never delayed
    pub deadline: Option<NaiveDate>,

    /// Contact responsible for this stage
    pub assignee_id: Option<DocId>,
}

impl Stage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_status(mut self, status: StageStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&StageStatus::InProgress).unwrap(),
            r#""in-progress""#
        );
        assert_eq!(
            serde_json::to_string(&StageStatus::Delayed).unwrap(),
            r#""delayed""#
        );
    }

    #[test]
    fn test_rank_ordering() {
        assert!(StageStatus::Pending.rank() < StageStatus::InProgress.rank());
        assert!(StageStatus::InProgress.rank() < StageStatus::Completed.rank());
    }

    #[test]
    fn test_delayed_is_not_storable() {
        assert!(StageStatus::Pending.storable());
        assert!(StageStatus::Completed.storable());
        assert!(!StageStatus::Delayed.storable());
    }

    #[test]
    fn test_missing_status_defaults_to_pending() {
        let stage: Stage = serde_json::from_str(r#"{"title": "Site survey"}"#).unwrap();
        assert_eq!(stage.status, StageStatus::Pending);
        assert!(stage.deadline.is_none());
    }
}
