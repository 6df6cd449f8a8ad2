// ABOUTME: Rollover processor moving overdue incomplete tasks onto today
// ABOUTME: One conditional bulk UPDATE; idempotent and safe to race

use carryover_core::Day;
use carryover_storage::{format_timestamp, StorageResult};
use tracing::{debug, info};

use crate::storage::TaskStorage;

impl TaskStorage {
    /// Move every incomplete task whose day is before `today` onto `today`.
    ///
    /// Completed tasks and tasks already on today or a later day are never
    /// touched. Returns how many tasks moved; a second call with the same day
    /// moves nothing.
    pub async fn roll_over(&self, today: Day) -> StorageResult<u64> {
        let today = today.to_string();
        let now = format_timestamp(self.clock.now());

        let result = sqlx::query(
            r#"
            UPDATE tasks
            SET day = ?, updated_at = ?
            WHERE completed = 0 AND day < ?
            "#,
        )
        .bind(&today)
        .bind(&now)
        .bind(&today)
        .execute(&self.pool)
        .await?;

        let moved = result.rows_affected();
        if moved > 0 {
            info!("Rolled {} task(s) over to {}", moved, today);
        } else {
            debug!("Nothing to roll over to {}", today);
        }

        Ok(moved)
    }
}
