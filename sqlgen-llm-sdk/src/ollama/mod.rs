pub mod client;
pub mod envelope;
pub mod tags;
pub mod types;

pub use client::{OllamaClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use envelope::{unwrap_field, EnvelopeError, InnerPayload, OuterEnvelope};
pub use tags::{adapt_tags, ModelList};
pub use types::*;
