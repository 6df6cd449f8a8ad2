// ABOUTME: Note storage layer using SQLite
// ABOUTME: Plain CRUD, listed most recently updated first

use std::sync::Arc;

use carryover_core::{generate_id, Clock, Color};
use carryover_storage::{format_timestamp, parse_timestamp, StorageError, StorageResult};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};
use tracing::debug;

use crate::types::{Note, NoteCreateInput, NoteUpdateInput};

const ENTITY: &str = "Note";

pub struct NoteStorage {
    pool: SqlitePool,
    clock: Arc<dyn Clock>,
}

impl NoteStorage {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    pub async fn list_notes(&self) -> StorageResult<Vec<Note>> {
        debug!("Listing notes");

        sqlx::query("SELECT * FROM notes ORDER BY updated_at DESC, created_at DESC, rowid DESC")
            .fetch_all(&self.pool)
            .await?
            .iter()
            .map(row_to_note)
            .collect()
    }

    pub async fn get_note(&self, note_id: &str) -> StorageResult<Note> {
        let row = sqlx::query("SELECT * FROM notes WHERE id = ?")
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found(ENTITY, note_id))?;

        row_to_note(&row)
    }

    pub async fn create_note(&self, input: NoteCreateInput) -> StorageResult<Note> {
        let note_id = generate_id();
        let timestamp = format_timestamp(self.clock.now());

        debug!("Creating note: {}", note_id);

        let row = sqlx::query(
            r#"
            INSERT INTO notes (id, title, text, color, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&note_id)
        .bind(input.title.unwrap_or_default())
        .bind(&input.text)
        .bind(input.color.unwrap_or_default().as_str())
        .bind(&timestamp)
        .bind(&timestamp)
        .fetch_one(&self.pool)
        .await?;

        row_to_note(&row)
    }

    pub async fn update_note(&self, note_id: &str, input: NoteUpdateInput) -> StorageResult<Note> {
        debug!("Updating note: {}", note_id);

        if input.is_empty() {
            return self.get_note(note_id).await;
        }

        let mut query = String::from("UPDATE notes SET updated_at = ?");
        if input.title.is_some() {
            query.push_str(", title = ?");
        }
        if input.text.is_some() {
            query.push_str(", text = ?");
        }
        if input.color.is_some() {
            query.push_str(", color = ?");
        }
        query.push_str(" WHERE id = ? RETURNING *");

        let mut q = sqlx::query(&query).bind(format_timestamp(self.clock.now()));
        if let Some(title) = &input.title {
            q = q.bind(title);
        }
        if let Some(text) = &input.text {
            q = q.bind(text);
        }
        if let Some(color) = input.color {
            q = q.bind(color.as_str());
        }

        let row = q
            .bind(note_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StorageError::not_found(ENTITY, note_id))?;

        row_to_note(&row)
    }

    pub async fn delete_note(&self, note_id: &str) -> StorageResult<()> {
        debug!("Deleting note: {}", note_id);

        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(note_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found(ENTITY, note_id));
        }

        Ok(())
    }
}

fn row_to_note(row: &SqliteRow) -> StorageResult<Note> {
    let color: String = row.try_get("color")?;
    let created_at: String = row.try_get("created_at")?;
    let updated_at: String = row.try_get("updated_at")?;

    Ok(Note {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        text: row.try_get("text")?,
        color: color.parse::<Color>().map_err(|_| StorageError::Corrupt {
            column: "color",
            value: color.clone(),
        })?,
        created_at: parse_timestamp("created_at", &created_at)?,
        updated_at: parse_timestamp("updated_at", &updated_at)?,
    })
}
