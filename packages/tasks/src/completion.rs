// ABOUTME: Completion tracker deciding the fields written alongside a completed toggle
// ABOUTME: completed, completed_at and the re-anchored day always travel in one write

use carryover_core::Day;
use chrono::{DateTime, Utc};

/// How a completion toggle affects the task's `day` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayChange {
    /// Leave the stored day as it is.
    Keep,
    /// The caller asked for this day.
    Set(Day),
    /// Move to this day only if the row is currently completed.
    ReanchorIfCompleted(Day),
}

/// Column values that accompany a change to `completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionChange {
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub day: DayChange,
}

impl CompletionChange {
    /// Completing stamps the time and leaves the day alone unless the caller
    /// supplied one. Un-completing clears the stamp; a task that was completed
    /// goes back on today unless the caller supplied a day, while an already
    /// open task keeps its day.
    pub fn new(completed: bool, requested_day: Option<Day>, now: DateTime<Utc>) -> Self {
        let day = match (completed, requested_day) {
            (_, Some(day)) => DayChange::Set(day),
            (true, None) => DayChange::Keep,
            (false, None) => DayChange::ReanchorIfCompleted(Day::of(now)),
        };

        Self {
            completed,
            completed_at: completed.then_some(now),
            day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(value)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_completing_sets_timestamp_and_keeps_day() {
        let now = at("2024-01-03T18:30:00Z");
        let change = CompletionChange::new(true, None, now);

        assert!(change.completed);
        assert_eq!(change.completed_at, Some(now));
        assert_eq!(change.day, DayChange::Keep);
    }

    #[test]
    fn test_completing_respects_requested_day() {
        let now = at("2024-01-03T18:30:00Z");
        let day: Day = "2024-01-03".parse().unwrap();
        let change = CompletionChange::new(true, Some(day), now);

        assert_eq!(change.day, DayChange::Set(day));
    }

    #[test]
    fn test_uncompleting_clears_timestamp_and_reanchors_completed_rows() {
        let now = at("2024-01-05T08:00:00Z");
        let change = CompletionChange::new(false, None, now);

        assert!(!change.completed);
        assert_eq!(change.completed_at, None);
        assert_eq!(
            change.day,
            DayChange::ReanchorIfCompleted("2024-01-05".parse().unwrap())
        );
    }

    #[test]
    fn test_uncompleting_with_explicit_day() {
        let now = at("2024-01-05T08:00:00Z");
        let day: Day = "2024-01-06".parse().unwrap();
        let change = CompletionChange::new(false, Some(day), now);

        assert_eq!(change.day, DayChange::Set(day));
    }

    #[test]
    fn test_completed_iff_timestamp() {
        let now = at("2024-01-05T08:00:00Z");
        for completed in [true, false] {
            let change = CompletionChange::new(completed, None, now);
            assert_eq!(change.completed, change.completed_at.is_some());
        }
    }
}
