// ABOUTME: Validated request DTOs for task and note endpoints
// ABOUTME: Unknown fields and malformed values are rejected instead of reaching the store

use axum::body::Bytes;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use carryover_core::{require_id, require_text, Color, Day};
use carryover_notes::{NoteCreateInput, NoteUpdateInput};
use carryover_tasks::{TaskCreateInput, TaskUpdateInput};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::AppError;

/// `Query` whose rejection uses the API error body instead of plain text.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                AppError::validation(format!("Malformed query string: {}", e.body_text()))
            })?;
        Ok(Self(value))
    }
}

/// Query string carrying an optional entity id
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub view: Option<String>,
}

/// Parse a JSON body; an empty body yields the DTO's default.
pub fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Malformed request body: {}", e)))
}

/// Resolve the target id from path, then query, then body.
pub fn resolve_id(
    label: &'static str,
    path: Option<&str>,
    query: &IdQuery,
    body: Option<&str>,
) -> Result<String, AppError> {
    require_id(label, [path, query.id.as_deref(), body]).map_err(AppError::from)
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTaskRequest {
    pub text: Option<String>,
    pub color: Option<Color>,
    pub day: Option<Day>,
}

impl CreateTaskRequest {
    pub fn into_input(self) -> Result<TaskCreateInput, AppError> {
        Ok(TaskCreateInput {
            text: require_text("Text", self.text.as_deref())?,
            color: self.color,
            day: self.day,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTaskRequest {
    pub id: Option<String>,
    pub text: Option<String>,
    pub color: Option<Color>,
    pub day: Option<Day>,
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn into_input(self) -> Result<TaskUpdateInput, AppError> {
        let text = match self.text {
            Some(text) => Some(require_text("Text", Some(&text))?),
            None => None,
        };
        Ok(TaskUpdateInput {
            text,
            color: self.color,
            day: self.day,
            completed: self.completed,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteRequest {
    pub id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateNoteRequest {
    pub title: Option<String>,
    pub text: Option<String>,
    pub color: Option<Color>,
}

impl CreateNoteRequest {
    pub fn into_input(self) -> Result<NoteCreateInput, AppError> {
        Ok(NoteCreateInput {
            title: self.title,
            text: require_text("Text", self.text.as_deref())?,
            color: self.color,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateNoteRequest {
    pub id: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub color: Option<Color>,
}

impl UpdateNoteRequest {
    pub fn into_input(self) -> Result<NoteUpdateInput, AppError> {
        let text = match self.text {
            Some(text) => Some(require_text("Text", Some(&text))?),
            None => None,
        };
        Ok(NoteUpdateInput {
            title: self.title,
            text,
            color: self.color,
        })
    }
}
