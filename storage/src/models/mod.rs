//! Record models persisted by the repositories.

mod chat_message;
mod correction;
mod memory_entry;

pub use chat_message::ChatMessageRecord;
pub use correction::{CorrectionRecord, DEFAULT_AUTHOR};
pub use memory_entry::MemoryEntryRecord;
