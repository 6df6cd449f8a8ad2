// ABOUTME: Task lifecycle for Carryover: daily rollover, views, and completion tracking
// ABOUTME: Provides types and SQLite storage for tasks

pub mod completion;
pub mod rollover;
pub mod storage;
pub mod types;
pub mod views;

pub use completion::{CompletionChange, DayChange};
pub use storage::TaskStorage;
pub use types::{Task, TaskCreateInput, TaskUpdateInput, TaskView};
