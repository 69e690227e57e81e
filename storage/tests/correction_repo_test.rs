//! Integration tests for [`storage::CorrectionRepository`].
//!
//! Covers save, tags round-trip through the JSON column, the default
//! author, and the deterministic newest-first scan order.

use storage::{CorrectionRecord, CorrectionRepository, SqlitePoolManager, DEFAULT_AUTHOR};
use tempfile::TempDir;

async fn test_repo(temp_dir: &TempDir) -> CorrectionRepository {
    let db_path = temp_dir.path().join("test.db");
    let pool = SqlitePoolManager::new(db_path.to_str().expect("utf-8 temp path"))
        .await
        .expect("Failed to create pool");
    CorrectionRepository::new(pool)
        .await
        .expect("Failed to create repository")
}

/// **Test: Saved correction round-trips, including tags and default author.**
///
/// **Setup:** Fresh DB; save a correction with two tags.
/// **Action:** `all_newest_first()`.
/// **Expected:** One record; prompt/reply/tags match; author is "admin".
#[tokio::test]
async fn test_save_and_fetch_with_tags() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;

    let correction = CorrectionRecord::new(
        "refund",
        "Refunds take 3-5 days.",
        vec!["billing".to_string(), "refunds".to_string()],
    );
    repo.save(&correction).await.expect("Failed to save");

    let all = repo.all_newest_first().await.expect("Failed to fetch");

    assert_eq!(all.len(), 1);
    assert_eq!(all[0].prompt, "refund");
    assert_eq!(all[0].corrected_reply, "Refunds take 3-5 days.");
    assert_eq!(all[0].tags, vec!["billing", "refunds"]);
    assert_eq!(all[0].author, DEFAULT_AUTHOR);
}

/// **Test: Empty tag lists survive the JSON column.**
///
/// **Setup:** Save a correction with no tags.
/// **Action:** `all_newest_first()`.
/// **Expected:** Record comes back with an empty tags vector.
#[tokio::test]
async fn test_empty_tags_round_trip() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;

    let correction = CorrectionRecord::new("hours", "We're open 9-5.", Vec::new());
    repo.save(&correction).await.expect("Failed to save");

    let all = repo.all_newest_first().await.expect("Failed to fetch");

    assert_eq!(all.len(), 1);
    assert!(all[0].tags.is_empty());
}

/// **Test: Scan order is newest first, with insertion order breaking ties.**
///
/// **Setup:** Save three corrections back-to-back.
/// **Action:** `all_newest_first()`.
/// **Expected:** Records come back in reverse insertion order.
#[tokio::test]
async fn test_all_newest_first_order() {
    let temp_dir = TempDir::new().expect("temp dir");
    let repo = test_repo(&temp_dir).await;

    for prompt in ["first", "second", "third"] {
        let correction = CorrectionRecord::new(prompt, format!("{} reply", prompt), Vec::new());
        repo.save(&correction).await.expect("Failed to save");
    }

    let all = repo.all_newest_first().await.expect("Failed to fetch");

    assert_eq!(all.len(), 3);
    assert_eq!(all[0].prompt, "third");
    assert_eq!(all[1].prompt, "second");
    assert_eq!(all[2].prompt, "first");
}
