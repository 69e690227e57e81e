//! Integration tests for [`storage::BrainRepository`].
//!
//! Covers save and the newest-first recency scan backing completion
//! context and the brain dump endpoint.

use storage::{BrainRepository, MemoryEntryRecord, SqlitePoolManager};
use tempfile::TempDir;

async fn test_repo(temp_dir: &TempDir) -> BrainRepository {
    let db_path = temp_dir.path().join("test.db");
    let pool = SqlitePoolManager::new(db_path.to_str().expect("utf-8 temp path"))
        .await
        .expect("Failed to create pool");
    BrainRepository::new(pool)
        .await
        .expect("Failed to create repository")
}

/// **Test: Saved entry round-trips with all fields.**
///
/// **Setup:** Fresh DB; save one entry with topic/content/source.
/// **Action:** `recent(10)`.
/// **Expected:** One record with matching fields.
#[tokio::test]
async fn test_save_and_fetch() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;

    let entry = MemoryEntryRecord::new("Group Chat", "alice: refunds take a week", "Telegram - Deals");
    repo.save(&entry).await.expect("Failed to save entry");

    let recent = repo.recent(10).await.expect("Failed to fetch entries");

    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, entry.id);
    assert_eq!(recent[0].topic, "Group Chat");
    assert_eq!(recent[0].content, "alice: refunds take a week");
    assert_eq!(recent[0].source, "Telegram - Deals");
}

/// **Test: Recency scan returns newest first and honors the limit.**
///
/// **Setup:** Save 20 entries in order.
/// **Action:** `recent(15)`.
/// **Expected:** 15 records; the first is the last saved, the last is the
/// sixth saved. Entries written in the same instant keep insertion order.
#[tokio::test]
async fn test_recent_order_and_limit() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;

    for i in 0..20 {
        let entry = MemoryEntryRecord::new("Fact", format!("fact {}", i), "Manual");
        repo.save(&entry).await.expect("Failed to save entry");
    }

    let recent = repo.recent(15).await.expect("Failed to fetch entries");

    assert_eq!(recent.len(), 15);
    assert_eq!(recent[0].content, "fact 19");
    assert_eq!(recent[14].content, "fact 5");
}
