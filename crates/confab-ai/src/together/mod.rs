//! Together chat API client.
//!
//! Implements the `CompletionProvider` trait against the
//! OpenAI-compatible chat completions endpoint
//! (https://api.together.xyz/v1/chat/completions).

mod api;
mod client;
mod config;

pub use client::TogetherClient;
pub use config::TogetherConfig;
