//! OpenAI Chat Completions client implementing [`LlmClient`].
//!
//! Works with any OpenAI-compatible endpoint (set `OPENAI_BASE_URL`). One non-streaming
//! `chat.create` call per report; the first choice's text is the reply.
//!
//! **Interaction**: Built from [`env_config::LlmSettings`]; used by
//! [`ReportService`](crate::service::ReportService) like [`MockLlm`](super::MockLlm).

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use env_config::{LlmSettings, API_KEY_VARS};
use tracing::{debug, trace};

use crate::error::ReportError;
use crate::llm::{LlmClient, LlmResponse, LlmUsage};
use crate::message::Message;

pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: Option<f32>,
}

impl ChatOpenAI {
    /// Build client with custom config (API key, base URL).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        Self {
            client: Client::with_config(config),
            model: model.into(),
            temperature: None,
        }
    }

    /// Build client from resolved settings.
    ///
    /// # Errors
    ///
    /// [`ReportError::MissingCredential`] when no API key is configured.
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, ReportError> {
        let api_key = settings
            .api_key
            .as_deref()
            .ok_or_else(|| ReportError::MissingCredential(API_KEY_VARS[0].to_string()))?;
        let mut config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(base) = settings.base_url.as_deref() {
            config = config.with_api_base(base);
        }
        let mut client = Self::with_config(config, settings.model.clone());
        client.temperature = settings.temperature;
        Ok(client)
    }

    /// Set temperature (0–2). Lower values are more deterministic.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn messages_to_request(messages: &[Message]) -> Vec<ChatCompletionRequestMessage> {
        messages
            .iter()
            .map(|m| match m {
                Message::System(s) => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage::from(s.as_str()),
                ),
                Message::User(s) => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage::from(s.as_str()),
                ),
            })
            .collect()
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn invoke(&self, messages: &[Message]) -> Result<LlmResponse, ReportError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages_to_request(messages));
        if let Some(t) = self.temperature {
            args.temperature(t);
        }
        let request = args
            .build()
            .map_err(|e| ReportError::Upstream(format!("OpenAI request build failed: {}", e)))?;

        debug!(
            trace_id = %trace_id,
            model = %self.model,
            message_count = messages.len(),
            temperature = ?self.temperature,
            "OpenAI chat create"
        );

        let response = self.client.chat().create(request).await.map_err(|e| {
            debug!(trace_id = %trace_id, error = %e, "OpenAI chat create failed");
            ReportError::Upstream(format!("OpenAI API error: {}", e))
        })?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let usage = response.usage.as_ref().map(|u| LlmUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        });
        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ReportError::Upstream("OpenAI returned no choices".to_string()))?;

        Ok(LlmResponse {
            content: choice.message.content.unwrap_or_default(),
            usage,
        })
    }
}
