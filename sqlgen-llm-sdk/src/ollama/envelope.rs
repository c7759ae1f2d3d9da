//! Decoding of `/api/generate` replies made with a JSON-schema `format`.
//!
//! The server wraps the model output in its own envelope,
//! `{"model": ..., "response": "<model text>", "done": true, ...}`, and the
//! model text is itself a JSON document such as `{"gen_sql": "SELECT 1"}`.
//! Decoding therefore happens in two stages with different severities:
//!
//! 1. the outer envelope must parse, otherwise there is nothing usable and
//!    [`EnvelopeError`] is returned;
//! 2. the inner payload may be absent or malformed, which degrades to an
//!    empty value reported through [`InnerPayload`].

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

/// Fatal first-stage failure
#[derive(Error, Debug)]
pub enum EnvelopeError {
    #[error("Outer envelope is not valid JSON: {source}")]
    Outer {
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of the second stage
#[derive(Debug)]
pub enum InnerPayload {
    /// The requested field was present in the inner payload
    Extracted(String),
    /// The inner payload parsed but had no usable value for the field
    MissingField,
    /// The envelope carried no `response` text
    EmptyResponse,
    /// The `response` text was not valid JSON
    Malformed(serde_json::Error),
}

impl InnerPayload {
    /// The extracted value, or an empty string for every degraded outcome
    pub fn into_value(self) -> String {
        match self {
            Self::Extracted(value) => value,
            Self::MissingField | Self::EmptyResponse | Self::Malformed(_) => String::new(),
        }
    }

    pub fn is_extracted(&self) -> bool {
        matches!(self, Self::Extracted(_))
    }
}

/// Parsed outer envelope
#[derive(Debug, Clone)]
pub struct OuterEnvelope {
    value: Value,
}

impl OuterEnvelope {
    /// First stage: parse the verbatim server body
    pub fn parse(raw: &str) -> Result<Self, EnvelopeError> {
        let value = serde_json::from_str(raw).map_err(|source| EnvelopeError::Outer { source })?;
        Ok(Self { value })
    }

    /// The `response` string, empty when absent or not a string
    pub fn response(&self) -> &str {
        match self.value.get("response") {
            Some(Value::String(text)) => text,
            Some(other) => {
                warn!(response = %other, "Envelope 'response' is not a string, ignoring it");
                ""
            }
            None => "",
        }
    }

    /// Second stage: decode `response` and pull `field` out of it
    pub fn extract(&self, field: &str) -> InnerPayload {
        let text = self.response();
        if text.is_empty() {
            return InnerPayload::EmptyResponse;
        }

        let inner: Value = match serde_json::from_str(text) {
            Ok(inner) => inner,
            Err(e) => {
                warn!(error = %e, field, "Failed to parse nested 'response' payload");
                return InnerPayload::Malformed(e);
            }
        };

        match inner.get(field) {
            Some(Value::String(value)) => InnerPayload::Extracted(value.clone()),
            Some(Value::Null) | None => InnerPayload::MissingField,
            Some(other) => InnerPayload::Extracted(other.to_string()),
        }
    }
}

/// Run both stages over a raw `/api/generate` body
pub fn unwrap_field(raw: &str, field: &str) -> Result<InnerPayload, EnvelopeError> {
    Ok(OuterEnvelope::parse(raw)?.extract(field))
}
