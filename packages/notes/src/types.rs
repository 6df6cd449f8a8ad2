// ABOUTME: Note type definitions
// ABOUTME: Notes carry no day or completion state

use carryover_core::Color;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub text: String,
    pub color: Color,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteCreateInput {
    pub title: Option<String>,
    pub text: String,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdateInput {
    pub title: Option<String>,
    pub text: Option<String>,
    pub color: Option<Color>,
}

impl NoteUpdateInput {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none() && self.color.is_none()
    }
}
