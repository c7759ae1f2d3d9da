use thiserror::Error;

/// Errors raised while talking to the inference server
#[derive(Error, Debug)]
pub enum LlmError {
    /// Invalid request parameters (bad base URL, unserializable payload)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Server answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network, connection or timeout error
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// JSON parsing or serialization error
    #[error("Parse error: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },
}

impl LlmError {
    /// Create an invalid request error
    pub fn invalid_request<S: Into<String>>(message: S) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create an API error
    pub fn api_error(status: u16, message: String) -> Self {
        Self::Api { status, message }
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network { source } if source.is_timeout())
    }
}
