// ABOUTME: View resolver selecting and ordering tasks for today, history, or all
// ABOUTME: The today view rolls overdue tasks forward before reading

use carryover_core::Day;
use carryover_storage::StorageResult;
use tracing::{debug, warn};

use crate::storage::{row_to_task, TaskStorage};
use crate::types::{Task, TaskView};

impl TaskStorage {
    /// Resolve a view against the given day. `today` should be read once per
    /// request so the rollover and the filter agree.
    pub async fn list_view(&self, view: TaskView, today: Day) -> StorageResult<Vec<Task>> {
        debug!("Listing {} view for {}", view.as_str(), today);

        let rows = match view {
            TaskView::Today => {
                // a failed rollover only means stale days for this read; the next one retries
                if let Err(e) = self.roll_over(today).await {
                    warn!("Rollover to {} failed: {}", today, e);
                }

                sqlx::query(
                    r#"
                    SELECT * FROM tasks
                    WHERE day = ?
                    ORDER BY created_at DESC, rowid DESC
                    "#,
                )
                .bind(today.to_string())
                .fetch_all(&self.pool)
                .await?
            }
            TaskView::History => {
                sqlx::query(
                    r#"
                    SELECT * FROM tasks
                    WHERE completed = 1 AND day < ?
                    ORDER BY completed_at DESC, rowid DESC
                    "#,
                )
                .bind(today.to_string())
                .fetch_all(&self.pool)
                .await?
            }
            TaskView::All => {
                sqlx::query("SELECT * FROM tasks ORDER BY created_at DESC, rowid DESC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        rows.iter().map(row_to_task).collect()
    }
}
