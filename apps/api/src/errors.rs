use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Relay error taxonomy.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, RelayError>`.
/// Every variant becomes a non-2xx status with a caller-safe `detail`; upstream bodies
/// and error sources are logged here and never echoed.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API key not configured")]
    Configuration,

    #[error("Upstream returned status {status}")]
    UpstreamHttp { status: u16, body: String },

    #[error("Upstream returned no answer content")]
    EmptyResponse,

    #[error("Unexpected error: {0}")]
    Unexpected(#[source] LlmError),
}

impl From<LlmError> for RelayError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Api { status, body } => RelayError::UpstreamHttp { status, body },
            other => RelayError::Unexpected(other),
        }
    }
}

impl RelayError {
    fn status_code_and_detail(&self) -> (StatusCode, &'static str, String) {
        match self {
            RelayError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            RelayError::Configuration => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "API key not configured on the server.".to_string(),
            ),
            RelayError::UpstreamHttp { .. } => (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_ERROR",
                "Error contacting Groq API.".to_string(),
            ),
            RelayError::EmptyResponse => (
                StatusCode::BAD_GATEWAY,
                "EMPTY_RESPONSE",
                "No content in response from Groq API.".to_string(),
            ),
            RelayError::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An unexpected server error occurred.".to_string(),
            ),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::Configuration => {
                tracing::error!("Rejected query: GROQ_API_KEY is not configured");
            }
            RelayError::UpstreamHttp { status, body } => {
                tracing::error!("HTTP error contacting Groq API: {status} - {body}");
            }
            RelayError::EmptyResponse => {
                tracing::error!("Groq API returned no content");
            }
            RelayError::Unexpected(e) => {
                tracing::error!("An unexpected error occurred: {e:?}");
            }
            RelayError::InvalidRequest(_) => {}
        }

        let (status, code, detail) = self.status_code_and_detail();
        let body = Json(json!({
            "detail": detail,
            "code": code,
        }));

        (status, body).into_response()
    }
}
