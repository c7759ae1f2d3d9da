use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::debug;

use crate::{
    error::LlmError,
    ollama::{
        tags::{adapt_tags, ModelList},
        types::OllamaGenerateRequest,
    },
};

/// Base URL of a stock local Ollama install
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Applied to every request unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Ollama inference server client
///
/// Cloning is cheap: the underlying connection pool is shared, so a single
/// client can be re-targeted per request with [`OllamaClient::with_base_url`].
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl OllamaClient {
    /// Create a new Ollama client with default base URL and timeout
    pub fn new() -> Result<Self, LlmError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client whose every call (tags and generate) shares `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self, LlmError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::Network { source: e })?;

        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client,
        })
    }

    /// Set a custom base URL for the API
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch `/api/tags` and return the body as untyped JSON
    pub async fn list_tags(&self) -> Result<serde_json::Value, LlmError> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let body = Self::read_success_body(response).await?;
        debug!(url = %url, body = %body, "Received tag list");

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch `/api/tags` and reduce it to model names
    pub async fn list_models(&self) -> Result<ModelList, LlmError> {
        let tags = self.list_tags().await?;
        Ok(adapt_tags(tags))
    }

    /// Post to `/api/generate` and return the raw response body untouched
    ///
    /// The body is deliberately not decoded here: callers keep the verbatim
    /// text for diagnostics and decode it with [`crate::ollama::envelope`].
    pub async fn generate(&self, request: &OllamaGenerateRequest) -> Result<String, LlmError> {
        let url = format!("{}/api/generate", self.base_url);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(url = %url, model = %request.model, "Sending generate request");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Network { source: e })?;

        let body = Self::read_success_body(response).await?;
        debug!(url = %url, body = %body, "Raw generate response");

        Ok(body)
    }

    async fn read_success_body(response: reqwest::Response) -> Result<String, LlmError> {
        let status = response.status();

        if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| LlmError::Network { source: e })
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            match status {
                reqwest::StatusCode::BAD_REQUEST => Err(LlmError::invalid_request(error_text)),
                _ => Err(LlmError::api_error(status.as_u16(), error_text)),
            }
        }
    }
}
