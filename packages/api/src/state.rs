// ABOUTME: Shared application state handed to every handler
// ABOUTME: Storage layers and the day clock, built from an explicitly injected pool

use std::path::Path;
use std::sync::Arc;

use carryover_core::{Clock, SystemClock};
use carryover_notes::NoteStorage;
use carryover_storage::StorageError;
use carryover_tasks::TaskStorage;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub task_storage: Arc<TaskStorage>,
    pub note_storage: Arc<NoteStorage>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(pool: SqlitePool, clock: Arc<dyn Clock>) -> Self {
        Self {
            task_storage: Arc::new(TaskStorage::new(pool.clone(), clock.clone())),
            note_storage: Arc::new(NoteStorage::new(pool, clock.clone())),
            clock,
        }
    }

    /// Open the database at `database_path` and wire storage to the system clock.
    pub async fn init_with_path(database_path: &Path) -> Result<Self, StorageError> {
        let pool = carryover_storage::connect(database_path).await?;
        Ok(Self::new(pool, Arc::new(SystemClock)))
    }
}
