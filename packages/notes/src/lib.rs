// ABOUTME: Note management for Carryover
// ABOUTME: Provides types and storage layer for free-form notes

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::NoteStorage;
pub use types::{Note, NoteCreateInput, NoteUpdateInput};
