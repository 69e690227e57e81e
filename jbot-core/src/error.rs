use thiserror::Error;

#[derive(Error, Debug)]
pub enum JbotError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Notifier error: {0}")]
    Notify(String),

    #[error("Invalid chat id: {0}")]
    InvalidChatId(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JbotError>;
