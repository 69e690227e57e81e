//! Chain handlers for accepted inbound messages.

mod group_learning;
mod persistence;
mod reply;

pub use group_learning::GroupLearningHandler;
pub use persistence::PersistenceHandler;
pub use reply::ReplyHandler;
