//! Together client struct and request building.

use crate::Message;

use super::config::TogetherConfig;

pub(crate) const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Together chat API client.
pub struct TogetherClient {
    pub(crate) config: TogetherConfig,
    pub(crate) http: reqwest::Client,
}

impl TogetherClient {
    pub fn new(config: TogetherConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn chat_url(&self) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    /// Build the JSON request body for the chat completions API. The
    /// history goes over the wire as-is; system messages are part of the
    /// messages list in this API.
    pub(crate) fn build_request_body(
        &self,
        model: &str,
        temperature: f64,
        messages: &[Message],
    ) -> serde_json::Value {
        serde_json::json!({
            "model": model,
            "messages": messages,
            "temperature": temperature,
        })
    }
}
