//! Report generation error types.
//!
//! Used by [`ReportService`](crate::service::ReportService), the LLM clients, and interview
//! validation. Structural parse failures and upstream failures are distinct variants so a
//! caller can tell "retry the same input" apart from "fix credentials or input".

use thiserror::Error;

use crate::parser::ParseError;

#[derive(Debug, Error)]
pub enum ReportError {
    /// No API key was configured for the model provider.
    #[error("API key not set: set {0} (environment, .env, or config.toml [env])")]
    MissingCredential(String),

    /// The model call failed (network, provider, or request build error).
    #[error("Failed to generate reports from AI. Please check your API key and try again. ({0})")]
    Upstream(String),

    /// The model answered with no text.
    #[error("Received an empty response from the AI.")]
    EmptyResponse,

    /// The reply had no recognizable report structure.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An interview question was left blank.
    #[error("please answer every question; missing: {question}")]
    IncompleteAnswers { question: String },

    /// Answers could not be read (e.g. malformed YAML).
    #[error("invalid answers: {0}")]
    InvalidAnswers(String),
}

impl ReportError {
    /// True when resubmitting the same input may succeed; false when the user must
    /// reconfigure credentials or fix the input first.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Upstream(_) | Self::EmptyResponse | Self::Parse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_displays_verbatim() {
        let err = ReportError::from(ParseError::Unrecognized);
        assert_eq!(err.to_string(), ParseError::Unrecognized.to_string());
    }

    #[test]
    fn retryable_split_between_upstream_and_configuration() {
        assert!(ReportError::Upstream("timeout".into()).is_retryable());
        assert!(ReportError::EmptyResponse.is_retryable());
        assert!(ReportError::Parse(ParseError::Unrecognized).is_retryable());
        assert!(!ReportError::MissingCredential("OPENAI_API_KEY".into()).is_retryable());
        assert!(!ReportError::IncompleteAnswers {
            question: "q".into()
        }
        .is_retryable());
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let s = ReportError::MissingCredential("OPENAI_API_KEY".into()).to_string();
        assert!(s.contains("OPENAI_API_KEY"), "{}", s);
    }
}
