//! Mock LLM for tests and offline runs.
//!
//! Returns a fixed reply (or a fixed upstream failure) regardless of the request, and
//! records the messages of the last call so tests can inspect the assembled prompt.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ReportError;
use crate::llm::{LlmClient, LlmResponse};
use crate::message::Message;

enum MockReply {
    Content(String),
    Failure(String),
}

pub struct MockLlm {
    reply: MockReply,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<Message>>,
}

impl MockLlm {
    /// Mock that always answers with `content`.
    pub fn with_reply(content: impl Into<String>) -> Self {
        Self::from_reply(MockReply::Content(content.into()))
    }

    /// Mock whose every call fails with [`ReportError::Upstream`].
    pub fn failing(message: impl Into<String>) -> Self {
        Self::from_reply(MockReply::Failure(message.into()))
    }

    fn from_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    /// Number of `invoke` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Messages passed to the most recent call (empty before the first call).
    pub fn last_messages(&self) -> Vec<Message> {
        self.last_messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmClient for MockLlm {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, ReportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_messages.lock() {
            *last = messages.to_vec();
        }
        match &self.reply {
            MockReply::Content(c) => Ok(LlmResponse {
                content: c.clone(),
                usage: None,
            }),
            MockReply::Failure(e) => Err(ReportError::Upstream(e.clone())),
        }
    }
}
