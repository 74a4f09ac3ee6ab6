//! Markdown-to-report parser.
//!
//! The model reply is treated as a best-effort lexical grammar: each extraction pass
//! matches line patterns and silently drops items that do not fit. Deviations from the
//! expected template degrade to fewer items; only a reply with nothing recognizable at
//! all is an error.
//!
//! Passes: [`split_sections`] → [`parse_scaling`] / [`parse_optimization`].

mod bullets;
mod optimization;
mod scaling;
mod sections;

pub use optimization::parse_optimization;
pub use scaling::parse_scaling;
pub use sections::{split_sections, Sections};

use thiserror::Error;
use tracing::{debug, warn};

use crate::report::Reports;

/// Errors while parsing a model reply into reports.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Neither a market nor an optimization category could be extracted.
    #[error("Could not parse the response from the AI. The format might be incorrect. Please try again.")]
    Unrecognized,
}

/// Parses a markdown reply into both reports.
///
/// Pure and deterministic. Succeeds when at least one market or one category was found;
/// the other report may be empty.
///
/// # Errors
///
/// Returns [`ParseError::Unrecognized`] when both reports come out empty.
pub fn parse_report(markdown: &str) -> Result<Reports, ParseError> {
    let sections = split_sections(markdown);
    let reports = Reports {
        scaling: parse_scaling(sections.scaling),
        optimization: parse_optimization(sections.optimization),
    };
    if reports.is_empty() {
        warn!(len = markdown.len(), "no recognizable report structure");
        return Err(ParseError::Unrecognized);
    }
    debug!(
        markets = reports.scaling.markets.len(),
        categories = reports.optimization.categories.len(),
        "reports parsed"
    );
    Ok(reports)
}
