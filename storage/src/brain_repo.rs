//! Brain repository: persistence and recency scans for learned memory entries.

use crate::error::StorageError;
use crate::models::MemoryEntryRecord;
use crate::sqlite_pool::SqlitePoolManager;
use tracing::info;

#[derive(Clone)]
pub struct BrainRepository {
    pool_manager: SqlitePoolManager,
}

impl BrainRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating memory_entries table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS memory_entries (
                id TEXT PRIMARY KEY,
                topic TEXT NOT NULL,
                content TEXT NOT NULL,
                source TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_memory_entries_created_at ON memory_entries(created_at)",
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, entry: &MemoryEntryRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO memory_entries (id, topic, content, source, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.topic)
        .bind(&entry.content)
        .bind(&entry.source)
        .bind(entry.created_at)
        .execute(pool)
        .await?;

        info!(
            entry_id = %entry.id,
            topic = %entry.topic,
            source = %entry.source,
            "Saved memory entry"
        );
        Ok(())
    }

    /// Most recent entries, newest first. Ties on timestamp fall back to
    /// insertion order so the scan stays deterministic.
    pub async fn recent(&self, limit: i64) -> Result<Vec<MemoryEntryRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let entries: Vec<MemoryEntryRecord> = sqlx::query_as(
            "SELECT * FROM memory_entries ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;

        info!(count = entries.len(), "Retrieved recent memory entries");

        Ok(entries)
    }
}
