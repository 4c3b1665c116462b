//! CompletionProvider trait implementation for TogetherClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatError, CompletionProvider, Message, ProviderResponse};

use super::client::TogetherClient;

#[async_trait]
impl CompletionProvider for TogetherClient {
    async fn complete(
        &self,
        model: &str,
        temperature: f64,
        messages: &[Message],
    ) -> Result<ProviderResponse, ChatError> {
        let body = self.build_request_body(model, temperature, messages);

        debug!(model, history_len = messages.len(), "Together API request");

        let response = self
            .http
            .post(self.chat_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.config.api_key),
            )
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ChatError::ApiError(format!("HTTP {status}: {text}")));
        }

        // A 2xx body is never an error from here on: whatever shape it
        // has, extraction degrades instead of failing.
        let text = response
            .text()
            .await
            .map_err(|e| ChatError::NetworkError(e.to_string()))?;

        Ok(ProviderResponse::from_body(&text))
    }
}
