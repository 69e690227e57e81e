//! Shared SQLite pool for the entity repositories.

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::StorageError;

/// One pool per database file, handed to every repository through cheap
/// clones. The file is created on first connect.
#[derive(Clone)]
pub struct SqlitePoolManager {
    pool: SqlitePool,
}

impl SqlitePoolManager {
    /// Opens the database at `database_path`, creating it if missing.
    pub async fn new(database_path: &str) -> Result<Self, StorageError> {
        info!("Opening SQLite database: {}", database_path);

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Ok(Self { pool })
    }

    /// The underlying pool for running queries.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
