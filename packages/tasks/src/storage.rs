// ABOUTME: Task storage layer using SQLite
// ABOUTME: Handles CRUD operations for tasks; every mutation is a single statement

use std::sync::Arc;

use carryover_core::{generate_id, Clock, Color, Day};
use carryover_storage::{format_timestamp, parse_timestamp, StorageError, StorageResult};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use crate::completion::{CompletionChange, DayChange};
use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

pub(crate) const ENTITY: &str = "Task";

pub struct TaskStorage {
    pub(crate) pool: SqlitePool,
    pub(crate) clock: Arc<dyn Clock>,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub async fn get_task(&self, task_id: &str) -> StorageResult<Task> {
        debug!("Fetching task: {}", task_id);

        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found(ENTITY, task_id))?;

        row_to_task(&row)
    }

    pub async fn create_task(&self, input: TaskCreateInput) -> StorageResult<Task> {
        let task_id = generate_id();
        let now = self.clock.now();
        let day = input.day.unwrap_or_else(|| Day::of(now));
        let color = input.color.unwrap_or_default();
        let timestamp = format_timestamp(now);

        debug!("Creating task: {} on day {}", task_id, day);

        let row = sqlx::query(
            r#"
            INSERT INTO tasks (
                id, text, color, day, completed, completed_at, created_at, updated_at
            ) VALUES (?, ?, ?, ?, 0, NULL, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&task_id)
        .bind(&input.text)
        .bind(color.as_str())
        .bind(day.to_string())
        .bind(&timestamp)
        .bind(&timestamp)
        .fetch_one(&self.pool)
        .await?;

        row_to_task(&row)
    }

    /// Apply a partial update. A change to `completed` carries its timestamp
    /// (and, when reopening a completed task, the re-anchored day) in the same
    /// statement.
    pub async fn update_task(&self, task_id: &str, input: TaskUpdateInput) -> StorageResult<Task> {
        debug!("Updating task: {}", task_id);

        if input.is_empty() {
            return self.get_task(task_id).await;
        }

        let now = self.clock.now();
        let completion = input
            .completed
            .map(|completed| CompletionChange::new(completed, input.day, now));
        let day = match completion {
            Some(change) => change.day,
            None => input.day.map_or(DayChange::Keep, DayChange::Set),
        };

        // Build dynamic UPDATE query based on provided fields
        let mut query = String::from("UPDATE tasks SET updated_at = ?");
        if input.text.is_some() {
            query.push_str(", text = ?");
        }
        if input.color.is_some() {
            query.push_str(", color = ?");
        }
        match day {
            DayChange::Keep => {}
            DayChange::Set(_) => query.push_str(", day = ?"),
            // SET expressions read the row as it was before this statement
            DayChange::ReanchorIfCompleted(_) => {
                query.push_str(", day = CASE WHEN completed = 1 THEN ? ELSE day END")
            }
        }
        if completion.is_some() {
            query.push_str(", completed = ?, completed_at = ?");
        }
        query.push_str(" WHERE id = ? RETURNING *");

        let mut q = sqlx::query(&query).bind(format_timestamp(now));
        if let Some(text) = &input.text {
            q = q.bind(text);
        }
        if let Some(color) = input.color {
            q = q.bind(color.as_str());
        }
        if let DayChange::Set(day) | DayChange::ReanchorIfCompleted(day) = day {
            q = q.bind(day.to_string());
        }
        if let Some(change) = completion {
            q = q
                .bind(change.completed)
                .bind(change.completed_at.map(format_timestamp));
        }
        q = q.bind(task_id);

        let row = q
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found(ENTITY, task_id))?;

        row_to_task(&row)
    }

    pub async fn delete_task(&self, task_id: &str) -> StorageResult<()> {
        debug!("Deleting task: {}", task_id);

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found(ENTITY, task_id));
        }

        Ok(())
    }
}

pub(crate) fn row_to_task(row: &SqliteRow) -> StorageResult<Task> {
    let color: String = row.try_get("color")?;
    let day: String = row.try_get("day")?;
    let completed_at: Option<String> = row.try_get("completed_at")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Task {
        id: row.try_get("id")?,
        text: row.try_get("text")?,
        color: color.parse::<Color>().map_err(|_| StorageError::Corrupt {
            column: "color",
            value: color.clone(),
        })?,
        day: day.parse::<Day>().map_err(|_| StorageError::Corrupt {
            column: "day",
            value: day.clone(),
        })?,
        completed: row.try_get("completed")?,
        completed_at: completed_at
            .as_deref()
            .map(|value| parse_timestamp("completed_at", value))
            .transpose()?,
        created_at: parse_timestamp("created_at", &created_at)?,
        updated_at: parse_timestamp("updated_at", &updated_at)?,
    })
}
