//! Message repository: persistence and queries for inbound chat messages.
//!
//! Uses SqlitePoolManager and ChatMessageRecord. Rows are append-only;
//! callers use save/recent_by_chat/count.

use crate::error::StorageError;
use crate::models::ChatMessageRecord;
use crate::sqlite_pool::SqlitePoolManager;
use tracing::info;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating chat_messages table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS chat_messages (
                id TEXT PRIMARY KEY,
                chat_id TEXT NOT NULL,
                text TEXT NOT NULL,
                received_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_chat_messages_chat_id ON chat_messages(chat_id);
            CREATE INDEX IF NOT EXISTS idx_chat_messages_received_at ON chat_messages(received_at);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    pub async fn save(&self, message: &ChatMessageRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO chat_messages (id, chat_id, text, received_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.chat_id)
        .bind(&message.text)
        .bind(message.received_at)
        .execute(pool)
        .await?;

        info!(
            message_id = %message.id,
            chat_id = %message.chat_id,
            "Saved chat message"
        );
        Ok(())
    }

    /// Most recent messages for one chat, newest first.
    pub async fn recent_by_chat(
        &self,
        chat_id: &str,
        limit: i64,
    ) -> Result<Vec<ChatMessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let messages: Vec<ChatMessageRecord> = sqlx::query_as(
            "SELECT * FROM chat_messages WHERE chat_id = ? ORDER BY received_at DESC, rowid DESC LIMIT ?",
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        info!(
            chat_id = %chat_id,
            count = messages.len(),
            "Retrieved recent chat messages"
        );

        Ok(messages)
    }

    pub async fn count(&self) -> Result<i64, StorageError> {
        let pool = self.pool_manager.pool();

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM chat_messages")
            .fetch_one(pool)
            .await?;

        Ok(total.0)
    }
}
