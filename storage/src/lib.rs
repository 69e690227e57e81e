//! Storage crate: chat message, memory, and correction persistence.
//!
//! ## Modules
//!
//! - [`error`] – Storage error type
//! - [`models`] – ChatMessageRecord, MemoryEntryRecord, CorrectionRecord
//! - [`message_repo`] – MessageRepository (inbound chat messages)
//! - [`brain_repo`] – BrainRepository (learned memory entries)
//! - [`correction_repo`] – CorrectionRepository (prompt→reply overrides)
//! - [`sqlite_pool`] – SqlitePoolManager
//!
//! All three entity types are append-only: repositories expose save and
//! read paths, no update or delete.

mod brain_repo;
mod correction_repo;
mod error;
mod message_repo;
mod models;
mod sqlite_pool;

pub use brain_repo::BrainRepository;
pub use correction_repo::CorrectionRepository;
pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{ChatMessageRecord, CorrectionRecord, MemoryEntryRecord, DEFAULT_AUTHOR};
pub use sqlite_pool::SqlitePoolManager;
