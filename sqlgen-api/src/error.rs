use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use sqlgen_llm_sdk::{error::LlmError, ollama::EnvelopeError};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Inference server unreachable or answered non-2xx; the cause is
    /// logged but never sent to the client
    #[error("Failed to communicate with the inference server")]
    Upstream(#[source] LlmError),

    /// `/api/generate` body was not JSON; the raw body goes back to the
    /// client for diagnosis
    #[error("Failed to parse the inference server response")]
    MalformedEnvelope {
        raw: String,
        #[source]
        source: EnvelopeError,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::MalformedEnvelope { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let debug_response = match self {
            ApiError::MalformedEnvelope { raw, .. } => Some(raw.clone()),
            ApiError::Upstream(_) | ApiError::InvalidRequest(_) => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            debug_response,
        })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
