// ABOUTME: Client-side notes list with optimistic create and confirmed edits and deletes
// ABOUTME: Same reconciliation rules as tasks without views or completion

use std::sync::Arc;

use carryover_core::{Clock, Color};
use carryover_notes::{Note, NoteCreateInput, NoteUpdateInput};
use tracing::{debug, warn};

use crate::client::ApiClient;
use crate::collection::LocalCollection;
use crate::error::{ClientError, ClientResult};
use crate::task_board::CreateFailed;
use crate::temp_id::{generate_temp_id, is_temporary_id};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub text: String,
    pub color: Option<Color>,
}

impl NoteDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

pub struct NoteBoard {
    client: ApiClient,
    clock: Arc<dyn Clock>,
    notes: LocalCollection<Note>,
}

impl NoteBoard {
    pub fn new(client: ApiClient, clock: Arc<dyn Clock>) -> Self {
        Self {
            client,
            clock,
            notes: LocalCollection::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.items()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub async fn refresh(&mut self) -> ClientResult<()> {
        let notes = self.client.list_notes().await?;
        debug!("Loaded {} notes", notes.len());
        self.notes.replace_all(notes);
        Ok(())
    }

    pub async fn add_note(&mut self, draft: NoteDraft) -> Result<Note, CreateFailed<NoteDraft>> {
        let text = draft.text.trim().to_string();
        if text.is_empty() {
            return Err(CreateFailed {
                draft,
                source: ClientError::Validation("Text is required.".to_string()),
            });
        }

        let now = self.clock.now();
        let temp_id = generate_temp_id(now);
        self.notes.insert_provisional(Note {
            id: temp_id.clone(),
            title: draft.title.clone().unwrap_or_default(),
            text: text.clone(),
            color: draft.color.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        });

        let input = NoteCreateInput {
            title: draft.title.clone(),
            text,
            color: draft.color,
        };
        match self.client.create_note(&input).await {
            Ok(note) => {
                self.notes.confirm(&temp_id, note.clone());
                Ok(note)
            }
            Err(source) => {
                warn!("Creating note failed: {}", source);
                self.notes.rollback(&temp_id);
                Err(CreateFailed { draft, source })
            }
        }
    }

    pub async fn edit(&mut self, id: &str, input: NoteUpdateInput) -> ClientResult<Note> {
        if is_temporary_id(id) {
            return Err(ClientError::Provisional(id.to_string()));
        }
        if let Some(text) = &input.text {
            if text.trim().is_empty() {
                return Err(ClientError::Validation("Text is required.".to_string()));
            }
        }

        let updated = self.client.update_note(id, &input).await?;
        self.notes.apply(updated.clone());
        Ok(updated)
    }

    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        if is_temporary_id(id) {
            return Err(ClientError::Provisional(id.to_string()));
        }
        self.client.delete_note(id).await?;
        self.notes.remove(id);
        Ok(())
    }
}
