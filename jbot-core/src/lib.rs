//! Core crate: inbound message types, the Handler trait, the outbound
//! Notifier trait, error taxonomy, and tracing initialization.
//!
//! Transport crates (Telegram, HTTP) convert their envelopes into
//! [`InboundMessage`] and drive a chain of [`Handler`]s; replies travel
//! back through a [`Notifier`] or the transport's own response body.

mod error;
mod logger;
mod notifier;
mod types;

pub use error::{JbotError, Result};
pub use logger::init_tracing;
pub use notifier::Notifier;
pub use types::{Chat, ChatKind, Handler, HandlerResponse, InboundMessage, Sender};
