use crate::config::OllamaConfig;
use crate::error::{ApiError, ApiResult};
use crate::helpers::prompts::single_field_schema;
use sqlgen_llm_sdk::{
    error::LlmError,
    ollama::{OllamaClient, OllamaGenerateRequest, OuterEnvelope},
};
use tracing::{debug, error, info};

/// Build the client prototype shared by all handlers
///
/// Handlers clone it and point the clone at the request's server URL.
pub fn create_ollama_client(config: &OllamaConfig) -> Result<OllamaClient, LlmError> {
    let client = OllamaClient::with_timeout(config.timeout())?.with_base_url(&config.default_url);

    info!(
        default_url = %client.base_url(),
        timeout_secs = config.timeout_secs,
        "Created inference server client"
    );

    Ok(client)
}

/// Output of a single-field completion
#[derive(Debug, Clone, PartialEq)]
pub struct FieldCompletion {
    /// Extracted value, empty when the inner payload was unusable
    pub value: String,
    /// Verbatim `/api/generate` body
    pub raw: String,
}

/// Ask the model for a JSON object holding only `field` and extract it
///
/// Transport failures and an unparsable envelope are errors; a missing or
/// malformed inner payload yields an empty value.
pub async fn complete_single_field(
    client: &OllamaClient,
    model: &str,
    prompt: String,
    field: &str,
) -> ApiResult<FieldCompletion> {
    let request = OllamaGenerateRequest::with_schema(model, prompt, single_field_schema(field));

    let raw = client.generate(&request).await.map_err(|e| {
        error!(
            error = %e,
            timed_out = e.is_timeout(),
            server_url = %client.base_url(),
            model,
            "Inference server request failed"
        );
        ApiError::Upstream(e)
    })?;

    let envelope = match OuterEnvelope::parse(&raw) {
        Ok(envelope) => envelope,
        Err(source) => {
            error!(error = %source, raw = %raw, "Failed to parse inference server envelope");
            return Err(ApiError::MalformedEnvelope { raw, source });
        }
    };

    let payload = envelope.extract(field);
    debug!(field, extracted = payload.is_extracted(), "Decoded inner payload");

    Ok(FieldCompletion {
        value: payload.into_value(),
        raw,
    })
}
