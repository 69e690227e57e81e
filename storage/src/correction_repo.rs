//! Correction repository: persistence and full scans of prompt→reply overrides.
//!
//! Tags are stored as a JSON text column. The read path returns newest
//! first because the resolver's first-match-wins scan is user-visible and
//! must be deterministic.

use crate::error::StorageError;
use crate::models::CorrectionRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

#[derive(Clone)]
pub struct CorrectionRepository {
    pool_manager: SqlitePoolManager,
}

/// Raw row shape; `tags` holds the JSON-encoded list.
#[derive(sqlx::FromRow)]
struct CorrectionRow {
    id: String,
    prompt: String,
    corrected_reply: String,
    tags: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl CorrectionRow {
    fn into_record(self) -> CorrectionRecord {
        let tags = serde_json::from_str(&self.tags).unwrap_or_else(|e| {
            warn!(correction_id = %self.id, error = %e, "Unreadable tags column, treating as empty");
            Vec::new()
        });
        CorrectionRecord {
            id: self.id,
            prompt: self.prompt,
            corrected_reply: self.corrected_reply,
            tags,
            author: self.author,
            created_at: self.created_at,
        }
    }
}

impl CorrectionRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating corrections table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS corrections (
                id TEXT PRIMARY KEY,
                prompt TEXT NOT NULL,
                corrected_reply TEXT NOT NULL,
                tags TEXT NOT NULL,
                author TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_corrections_created_at ON corrections(created_at)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, correction: &CorrectionRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        let tags_json = serde_json::to_string(&correction.tags)
            .map_err(|e| StorageError::Database(format!("Failed to encode tags: {}", e)))?;

        sqlx::query(
            r#"
            INSERT INTO corrections (id, prompt, corrected_reply, tags, author, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&correction.id)
        .bind(&correction.prompt)
        .bind(&correction.corrected_reply)
        .bind(tags_json)
        .bind(&correction.author)
        .bind(correction.created_at)
        .execute(pool)
        .await?;

        info!(
            correction_id = %correction.id,
            prompt = %correction.prompt,
            "Saved correction"
        );
        Ok(())
    }

    /// All corrections, newest first. Ties on timestamp fall back to
    /// insertion order so first-match-wins stays deterministic.
    pub async fn all_newest_first(&self) -> Result<Vec<CorrectionRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<CorrectionRow> =
            sqlx::query_as("SELECT * FROM corrections ORDER BY created_at DESC, rowid DESC")
                .fetch_all(pool)
                .await?;

        Ok(rows.into_iter().map(CorrectionRow::into_record).collect())
    }
}
