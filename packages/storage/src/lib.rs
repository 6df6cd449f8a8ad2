// ABOUTME: Data layer for Carryover: SQLite pool construction and migrations
// ABOUTME: Shared storage error type and timestamp encoding used by tasks and notes

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("{entity} not found.")]
    NotFound { entity: &'static str, id: String },
    #[error("Corrupt {column} value '{value}'")]
    Corrupt { column: &'static str, value: String },
}

impl StorageError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Open (creating if needed) the database file and bring its schema up to date.
pub async fn connect(database_path: &Path) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    debug!("Connecting to database: {}", database_path.display());

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    info!("Database ready at {}", database_path.display());

    Ok(pool)
}

/// Single-connection in-memory database, migrated. Every call gets a fresh store.
pub async fn connect_in_memory() -> StorageResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    // one connection that never idles out, otherwise the database vanishes with it
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> StorageResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Fixed-width RFC 3339 so that stored strings sort in time order.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn parse_timestamp(column: &'static str, value: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| StorageError::Corrupt {
            column,
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_is_fixed_width_and_round_trips() {
        let whole = Utc.with_ymd_and_hms(2024, 1, 3, 9, 0, 0).unwrap();
        let formatted = format_timestamp(whole);
        assert_eq!(formatted, "2024-01-03T09:00:00.000000Z");
        assert_eq!(parse_timestamp("created_at", &formatted).unwrap(), whole);

        let later = whole + chrono::Duration::microseconds(500_000);
        let later_formatted = format_timestamp(later);
        assert_eq!(later_formatted.len(), formatted.len());
        assert!(later_formatted > formatted);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("completed_at", "not a time").unwrap_err();
        assert!(matches!(
            err,
            StorageError::Corrupt {
                column: "completed_at",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_connect_in_memory_creates_tables() {
        let pool = connect_in_memory().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('tasks', 'notes') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        assert_eq!(tables, vec!["notes".to_string(), "tasks".to_string()]);
    }

    #[tokio::test]
    async fn test_schema_rejects_completed_without_timestamp() {
        let pool = connect_in_memory().await.unwrap();

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (id, text, color, day, completed, completed_at, created_at, updated_at)
            VALUES ('t1', 'x', 'mist', '2024-01-01', 1, NULL, '2024-01-01T00:00:00.000000Z', '2024-01-01T00:00:00.000000Z')
            "#,
        )
        .execute(&pool)
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connect_file_database_persists() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("carryover.db");

        {
            let pool = connect(&path).await.unwrap();
            sqlx::query(
                r#"
                INSERT INTO notes (id, title, text, color, created_at, updated_at)
                VALUES ('n1', '', 'remember', 'sky', '2024-01-01T00:00:00.000000Z', '2024-01-01T00:00:00.000000Z')
                "#,
            )
            .execute(&pool)
            .await
            .unwrap();
            pool.close().await;
        }

        let pool = connect(&path).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
