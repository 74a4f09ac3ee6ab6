//! LLM client abstraction for report generation.
//!
//! The report service depends on one callable: messages in, assistant markdown out.
//! The call is a single request/response with no retry, timeout policy, or streaming;
//! it either yields the full reply or fails.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::ChatOpenAI;

use async_trait::async_trait;

use crate::error::ReportError;
use crate::message::Message;

/// Token usage for one call (prompt + completion), when the provider reports it.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LlmUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Assistant reply for one call.
#[derive(Clone, Debug)]
pub struct LlmResponse {
    /// Raw assistant text (the markdown report).
    pub content: String,
    pub usage: Option<LlmUsage>,
}

/// Given the request messages, returns the assistant's markdown.
///
/// Implementations: [`ChatOpenAI`] (OpenAI-compatible API), [`MockLlm`] (fixed reply).
/// Failures map to [`ReportError::Upstream`] or [`ReportError::MissingCredential`].
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, ReportError>;
}
