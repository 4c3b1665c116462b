//! Together API client configuration.

use std::fmt;

use crate::ChatError;

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.together.xyz";

/// Together API client configuration.
#[derive(Clone)]
pub struct TogetherConfig {
    pub api_key: String,
    pub base_url: String,
}

impl fmt::Debug for TogetherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TogetherConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl TogetherConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create config from the environment.
    ///
    /// Reads `TOGETHER_API_KEY` (required) and `TOGETHER_BASE_URL`
    /// (optional override, e.g. for a compatible self-hosted endpoint).
    pub fn from_env() -> Result<Self, ChatError> {
        let api_key = std::env::var("TOGETHER_API_KEY").map_err(|_| {
            ChatError::ApiError("Together API not configured. Set TOGETHER_API_KEY.".into())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("TOGETHER_BASE_URL") {
            config.base_url = url;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
