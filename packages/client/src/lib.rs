// ABOUTME: HTTP client and optimistic local state for Carryover
// ABOUTME: Boards keep a local list in step with the server, reconciling confirmed results by id

pub mod client;
pub mod collection;
pub mod error;
pub mod note_board;
pub mod task_board;
pub mod temp_id;

pub use client::ApiClient;
pub use collection::{Identified, LocalCollection};
pub use error::{ClientError, ClientResult};
pub use note_board::{NoteBoard, NoteDraft};
pub use task_board::{CreateFailed, PendingTask, TaskBoard, TaskDraft};
pub use temp_id::{generate_temp_id, is_temporary_id};
