//! Query Relay — turns a caller's question into one chat-completion call.
//!
//! Flow: credential check → build [system, user] payload → one backend call →
//!       first choice's content.
//!
//! Stateless: the only shared data is the immutable credential and the prebuilt
//! system prompt, so concurrent queries never see each other's text.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::RelayError;
use crate::llm_client::prompts::{system_prompt, RESUME};
use crate::llm_client::{ChatBackend, ChatCompletionRequest, ChatMessage, Role, MODEL};

pub mod handlers;
#[cfg(test)]
pub(crate) mod test_support;

pub struct QueryRelay {
    backend: Arc<dyn ChatBackend>,
    api_key: Option<String>,
    system_prompt: String,
}

impl QueryRelay {
    pub fn new(backend: Arc<dyn ChatBackend>, api_key: Option<String>) -> Self {
        Self {
            backend,
            api_key,
            system_prompt: system_prompt(RESUME),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// The user message carries `query` byte-for-byte; JSON encoding is the only escaping.
    pub fn build_payload(&self, query: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: MODEL.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: self.system_prompt.clone(),
                },
                ChatMessage {
                    role: Role::User,
                    content: query.to_string(),
                },
            ],
        }
    }

    /// Answers one query. No retries; a failure of any kind ends the request.
    pub async fn handle(&self, query: &str) -> Result<String, RelayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("Query received but no API key is configured");
            return Err(RelayError::Configuration);
        };

        let payload = self.build_payload(query);
        info!(query_len = query.len(), model = MODEL, "Relaying query");

        let response = self.backend.send_chat_request(api_key, &payload).await?;

        response
            .text()
            .map(str::to_owned)
            .ok_or(RelayError::EmptyResponse)
    }
}
