// ABOUTME: Task type definitions
// ABOUTME: Task entity, its create/update inputs, and the view selector

use carryover_core::{Color, Day};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub text: String,
    pub color: Color,

    /// The day this task belongs to. Advanced by rollover while incomplete,
    /// frozen once completed.
    pub day: Day,

    pub completed: bool,
    /// Set exactly when `completed` is true.
    pub completed_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_active_on(&self, day: Day) -> bool {
        self.day == day
    }

    pub fn is_history_on(&self, today: Day) -> bool {
        self.completed && self.day < today
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreateInput {
    pub text: String,
    pub color: Option<Color>,
    pub day: Option<Day>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskUpdateInput {
    pub text: Option<String>,
    pub color: Option<Color>,
    pub day: Option<Day>,
    pub completed: Option<bool>,
}

impl TaskUpdateInput {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.color.is_none() && self.day.is_none() && self.completed.is_none()
    }
}

/// Which subset of tasks to return, and in what order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskView {
    /// Tasks owned by today, after rolling overdue ones forward. Newest first.
    #[default]
    Today,
    /// Tasks completed on an earlier day. Most recently completed first.
    History,
    /// Everything. Newest first.
    All,
}

impl TaskView {
    /// Missing selects today; anything unrecognised falls back to all.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            None | Some("today") => TaskView::Today,
            Some("history") => TaskView::History,
            Some(_) => TaskView::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskView::Today => "today",
            TaskView::History => "history",
            TaskView::All => "all",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None, TaskView::Today)]
    #[case(Some("today"), TaskView::Today)]
    #[case(Some("history"), TaskView::History)]
    #[case(Some("all"), TaskView::All)]
    #[case(Some("archive"), TaskView::All)]
    #[case(Some("TODAY"), TaskView::All)]
    #[case(Some(""), TaskView::All)]
    fn test_view_from_param(#[case] input: Option<&str>, #[case] expected: TaskView) {
        assert_eq!(TaskView::from_param(input), expected);
    }

    #[test]
    fn test_task_serializes_camel_case() {
        let now = DateTime::parse_from_rfc3339("2024-01-03T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let task = Task {
            id: "abc".to_string(),
            text: "buy milk".to_string(),
            color: Color::Sage,
            day: "2024-01-03".parse().unwrap(),
            completed: false,
            completed_at: None,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["day"], "2024-01-03");
        assert_eq!(value["color"], "sage");
        assert_eq!(value["completedAt"], serde_json::Value::Null);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }

    #[test]
    fn test_update_input_is_empty() {
        assert!(TaskUpdateInput::default().is_empty());
        assert!(!TaskUpdateInput {
            completed: Some(false),
            ..Default::default()
        }
        .is_empty());
    }
}
