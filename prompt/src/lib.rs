//! # Prompt
//!
//! Chat-completion message types, one-to-one with the OpenAI-style
//! Chat Completions `messages` array.
//!
//! ## Usage
//!
//! The reply resolver assembles a `Vec<ChatMessage>` (persona system
//! message, learned-memory system messages, user prompt) and hands it to
//! the `llm-client` crate, which maps each message onto the wire format.

/// Role of a message, one-to-one with Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of the `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role_and_content() {
        let system = ChatMessage::system("be terse");
        assert_eq!(system.role, MessageRole::System);
        assert_eq!(system.content, "be terse");

        let user = ChatMessage::user("hello");
        assert_eq!(user.role, MessageRole::User);

        let assistant = ChatMessage::assistant("hi");
        assert_eq!(assistant.role, MessageRole::Assistant);
    }
}
