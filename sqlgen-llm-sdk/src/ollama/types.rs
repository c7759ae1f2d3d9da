use serde::{Deserialize, Serialize};

/// Ollama completion request for `/api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateRequest {
    /// Model name
    pub model: String,
    /// Stream responses; always false here so the reply is a single envelope
    pub stream: bool,
    /// Prompt text
    pub prompt: String,
    /// JSON schema the reply must conform to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<serde_json::Value>,
}

impl OllamaGenerateRequest {
    /// Non-streaming request constrained to a JSON schema
    pub fn with_schema(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            stream: false,
            prompt: prompt.into(),
            format: Some(schema),
        }
    }
}

/// One installed model, reduced to its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTag {
    pub name: String,
}
