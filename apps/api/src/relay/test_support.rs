use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::llm_client::{
    ChatBackend, ChatCompletionRequest, ChatCompletionResponse, LlmError, Role,
};

/// What the stub answers with on every call.
pub(crate) enum StubReply {
    Content(String),
    /// Answers with the user message it was sent.
    EchoQuery,
    Raw(Value),
    Status(u16, String),
    Timeout,
}

/// In-memory `ChatBackend` that records every call it receives.
pub(crate) struct StubBackend {
    reply: StubReply,
    calls: AtomicUsize,
    seen: Mutex<Vec<(String, ChatCompletionRequest)>>,
}

impl StubBackend {
    pub(crate) fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn payloads(&self) -> Vec<ChatCompletionRequest> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|(_, payload)| payload.clone())
            .collect()
    }

    pub(crate) fn api_keys(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }
}

fn content_response(content: &str) -> ChatCompletionResponse {
    serde_json::from_value(json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    }))
    .unwrap()
}

#[async_trait]
impl ChatBackend for StubBackend {
    async fn send_chat_request(
        &self,
        api_key: &str,
        payload: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((api_key.to_string(), payload.clone()));

        // Let other in-flight calls interleave with this one.
        tokio::task::yield_now().await;

        match &self.reply {
            StubReply::Content(content) => Ok(content_response(content)),
            StubReply::EchoQuery => {
                let query = payload
                    .messages
                    .iter()
                    .find(|m| m.role == Role::User)
                    .map(|m| m.content.as_str())
                    .unwrap_or_default();
                Ok(content_response(query))
            }
            StubReply::Raw(value) => Ok(serde_json::from_value(value.clone())?),
            StubReply::Status(status, body) => Err(LlmError::Api {
                status: *status,
                body: body.clone(),
            }),
            StubReply::Timeout => Err(LlmError::Timeout),
        }
    }
}
