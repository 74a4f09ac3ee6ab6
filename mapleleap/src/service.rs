//! Report service: interview answers → prompt → one LLM call → parsed reports.
//!
//! Every failure is terminal for the request; recovery is the user resubmitting.
//! [`ReportError::is_retryable`] tells the caller which message to show.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::ReportError;
use crate::interview::InterviewAnswers;
use crate::llm::LlmClient;
use crate::parser::parse_report;
use crate::prompt::build_messages;
use crate::report::Reports;

#[derive(Clone)]
pub struct ReportService {
    llm: Arc<dyn LlmClient>,
}

impl ReportService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Validates the answers, then runs [`generate_from_text`](Self::generate_from_text)
    /// on the rendered interview.
    pub async fn generate(&self, answers: &InterviewAnswers) -> Result<Reports, ReportError> {
        answers.validate()?;
        self.generate_from_text(&answers.to_prompt_input()).await
    }

    /// Generates reports from a free-text business description.
    pub async fn generate_from_text(&self, user_input: &str) -> Result<Reports, ReportError> {
        let messages = build_messages(user_input);
        info!(input_len = user_input.len(), "requesting reports");

        let response = self.llm.invoke(&messages).await?;
        if let Some(usage) = &response.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "model usage"
            );
        }
        if response.content.trim().is_empty() {
            warn!("model returned an empty reply");
            return Err(ReportError::EmptyResponse);
        }

        let reports = parse_report(&response.content)?;
        info!(
            markets = reports.scaling.markets.len(),
            categories = reports.optimization.categories.len(),
            "reports ready"
        );
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::MockLlm;
    use crate::message::Message;
    use crate::parser::ParseError;

    const OPTIMIZATION_ONLY: &str = "# [OPTIMIZATION REPORT]\n### Customer Service\n*   **Helpdesk:** Faster replies. **Examples:** Zendesk, Freshdesk\n";

    fn answers() -> InterviewAnswers {
        InterviewAnswers::new([
            "Maple syrup".into(),
            "Quebec".into(),
            "Grocery".into(),
            "Organic".into(),
        ])
    }

    #[tokio::test]
    async fn generate_sends_interview_as_user_message() {
        let llm = Arc::new(MockLlm::with_reply(OPTIMIZATION_ONLY));
        let service = ReportService::new(llm.clone());
        let reports = service.generate(&answers()).await.unwrap();
        assert_eq!(reports.optimization.categories.len(), 1);
        let msgs = llm.last_messages();
        assert!(matches!(&msgs[1], Message::User(u) if u.contains("Maple syrup") && u.contains(crate::interview::QUESTIONS[0])));
    }

    #[tokio::test]
    async fn incomplete_answers_never_reach_the_model() {
        let llm = Arc::new(MockLlm::with_reply(OPTIMIZATION_ONLY));
        let service = ReportService::new(llm.clone());
        let mut a = answers();
        a.set_answer(0, "");
        let err = service.generate(&a).await.unwrap_err();
        assert!(matches!(err, ReportError::IncompleteAnswers { .. }));
        assert_eq!(llm.calls(), 0);
    }

    #[tokio::test]
    async fn whitespace_reply_is_empty_response() {
        let service = ReportService::new(Arc::new(MockLlm::with_reply("  \n ")));
        let err = service.generate_from_text("x").await.unwrap_err();
        assert!(matches!(err, ReportError::EmptyResponse));
    }

    #[tokio::test]
    async fn unstructured_reply_is_parse_error() {
        let service = ReportService::new(Arc::new(MockLlm::with_reply("Sorry, I can't help.")));
        let err = service.generate_from_text("x").await.unwrap_err();
        assert!(matches!(err, ReportError::Parse(ParseError::Unrecognized)));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn upstream_failure_is_propagated() {
        let service = ReportService::new(Arc::new(MockLlm::failing("503")));
        let err = service.generate_from_text("x").await.unwrap_err();
        assert!(matches!(err, ReportError::Upstream(_)));
    }
}
