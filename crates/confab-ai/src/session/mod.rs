//! Conversation session management.
//!
//! A `Session` holds the ordered conversation history plus the model id
//! and sampling temperature, and drives one-shot completion calls
//! against a `CompletionProvider`.

mod chat;
mod manager;

pub use manager::{Session, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
