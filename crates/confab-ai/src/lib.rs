//! Chat-session engine for confab.
//!
//! Provides:
//! - `Session` — ordered, append-only conversation history
//! - `CompletionProvider` — boundary trait for remote completion APIs
//! - `ProviderResponse` — tolerant extraction of replies from responses
//!   of unknown shape
//! - `TogetherClient` — provider backed by the Together chat API

pub mod response;
pub mod session;
pub mod together;

use async_trait::async_trait;

pub use response::{ChatCompletion, ProviderResponse};
pub use session::Session;
pub use together::{TogetherClient, TogetherConfig};

/// Remote completion boundary: turns a message history into a
/// provider-defined response object.
///
/// Implementations surface their own transport and API failures as
/// `ChatError`; they never interpret the response body beyond
/// classifying it into a [`ProviderResponse`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        model: &str,
        temperature: f64,
        messages: &[Message],
    ) -> Result<ProviderResponse, ChatError>;
}

/// One entry in a conversation history. Immutable once pushed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
}
