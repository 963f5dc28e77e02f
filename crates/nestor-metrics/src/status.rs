//! Effective stage status derivation

use chrono::NaiveDate;
use nestor_models::{Stage, StageStatus};

/// Compute the display status of a stage as of a given date.
///
/// A completed stage stays completed regardless of its deadline. Otherwise
/// a deadline strictly before `today` makes the stage delayed; a stage due
/// today is not yet delayed, and a stage without a deadline never is.
pub fn effective_status(stage: &Stage, today: NaiveDate) -> StageStatus {
    if stage.status.is_completed() {
        return StageStatus::Completed;
    }
    match stage.deadline {
        Some(deadline) if deadline < today => StageStatus::Delayed,
        _ => stage.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_completed_wins_over_past_deadline() {
        let today = date(2024, 6, 10);
        let stage = Stage::new("Final inspection")
            .with_status(StageStatus::Completed)
            .with_deadline(today - Duration::days(30));
        assert_eq!(effective_status(&stage, today), StageStatus::Completed);
    }

    #[test]
    fn test_past_deadline_derives_delayed() {
        let today = date(2024, 6, 10);
        let stage = Stage::new("Permit application").with_deadline(today - Duration::days(1));
        assert_eq!(effective_status(&stage, today), StageStatus::Delayed);

        let started = Stage::new("Installation")
            .with_status(StageStatus::InProgress)
            .with_deadline(today - Duration::days(1));
        assert_eq!(effective_status(&started, today), StageStatus::Delayed);
    }

    #[test]
    fn test_due_today_is_not_delayed() {
        let today = date(2024, 6, 10);
        let stage = Stage::new("Delivery").with_deadline(today);
        assert_eq!(effective_status(&stage, today), StageStatus::Pending);
    }

    #[test]
    fn test_future_deadline_passes_stored_status_through() {
        let today = date(2024, 6, 10);
        let stage = Stage::new("Commissioning")
            .with_status(StageStatus::InProgress)
            .with_deadline(today + Duration::days(14));
        assert_eq!(effective_status(&stage, today), StageStatus::InProgress);
    }

    #[test]
    fn test_no_deadline_never_delays() {
        let today = date(2024, 6, 10);
        let stage = Stage::new("Paperwork");
        assert_eq!(effective_status(&stage, today), StageStatus::Pending);
    }
}
