//! Chat messages sent to the model.
//!
//! A report request is always one system message (persona, task, output template)
//! followed by one user message (the interview answers).

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Message {
    /// Instructions for the model; placed first.
    System(String),
    /// The business description collected from the user.
    User(String),
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    pub fn content(&self) -> &str {
        match self {
            Self::System(s) | Self::User(s) => s,
        }
    }
}
