//! The four-question business interview and its conversion to prompt input.

use std::path::Path;

use serde::Deserialize;

use crate::error::ReportError;

/// Interview questions, in the order they are asked and rendered.
pub const QUESTIONS: [&str; 4] = [
    "What product or service do you offer?",
    "Where is your business based in Canada?",
    "Briefly describe your target industry and customer.",
    "What is your unique value proposition?",
];

/// One answer per entry of [`QUESTIONS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterviewAnswers {
    answers: [String; 4],
}

/// YAML shape for answers files.
#[derive(Debug, Deserialize)]
struct AnswersFile {
    product: String,
    location: String,
    industry: String,
    value_proposition: String,
}

impl InterviewAnswers {
    pub fn new(answers: [String; 4]) -> Self {
        Self { answers }
    }

    /// Parses answers from YAML with keys `product`, `location`, `industry`, `value_proposition`.
    pub fn from_yaml_str(s: &str) -> Result<Self, ReportError> {
        let file: AnswersFile =
            serde_yaml::from_str(s).map_err(|e| ReportError::InvalidAnswers(e.to_string()))?;
        Ok(Self::new([
            file.product,
            file.location,
            file.industry,
            file.value_proposition,
        ]))
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, ReportError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ReportError::InvalidAnswers(format!("read {}: {}", path.display(), e))
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn answers(&self) -> &[String; 4] {
        &self.answers
    }

    pub fn set_answer(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Appends dictated text to an answer, separated by one space unless the answer is
    /// empty or already ends with a space.
    pub fn append_transcript(&mut self, index: usize, transcript: &str) {
        if let Some(slot) = self.answers.get_mut(index) {
            if !(slot.is_empty() || slot.ends_with(' ')) {
                slot.push(' ');
            }
            slot.push_str(transcript);
        }
    }

    /// Fails on the first blank answer, naming its question.
    pub fn validate(&self) -> Result<(), ReportError> {
        match QUESTIONS
            .iter()
            .zip(&self.answers)
            .find(|(_, a)| a.trim().is_empty())
        {
            Some((q, _)) => Err(ReportError::IncompleteAnswers {
                question: (*q).to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Renders `question\nanswer` for each pair, separated by a blank line.
    pub fn to_prompt_input(&self) -> String {
        QUESTIONS
            .iter()
            .zip(&self.answers)
            .map(|(q, a)| format!("{}\n{}", q, a))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
