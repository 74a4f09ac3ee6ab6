//! MapleLeap CLI library: interview prompting, report rendering and output helpers
//! used by the `mapleleap` binary.
//!
//! - [`answers`]: collect interview answers interactively.
//! - [`display`]: plain-text rendering of reports and contacts.
//! - [`output`]: JSON output to stdout or a file.

pub mod answers;
pub mod display;
pub mod output;

use mapleleap::ReportError;
use thiserror::Error;

pub use answers::prompt_answers;
pub use display::{render_contacts, render_reports, truncate_display};
pub use output::write_json_output;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code: 2 when retrying the same input cannot help, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Report(e) if !e.is_retryable() => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapleleap::ParseError;

    #[test]
    fn exit_code_separates_input_errors_from_retryable_ones() {
        let missing = CliError::from(ReportError::MissingCredential("OPENAI_API_KEY".into()));
        assert_eq!(missing.exit_code(), 2);
        let parse = CliError::from(ReportError::from(ParseError::Unrecognized));
        assert_eq!(parse.exit_code(), 1);
        let io = CliError::from(std::io::Error::new(std::io::ErrorKind::Other, "x"));
        assert_eq!(io.exit_code(), 1);
    }
}
