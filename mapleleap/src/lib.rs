//! # MapleLeap
//!
//! Turns a short business interview into two structured reports by prompting a large
//! language model and parsing its markdown reply:
//!
//! - a **scaling report**: recommended export markets with an opportunity score,
//!   justification, target companies, distribution partners and an outreach email;
//! - an **optimization report**: software/technology recommendations grouped by category.
//!
//! The core is [`parse_report`], a pure, deterministic markdown-to-data parser. The
//! rest wires it to a model: [`InterviewAnswers`] → [`build_messages`] → [`LlmClient`] →
//! [`parse_report`], orchestrated by [`ReportService`].
//!
//! ## Main modules
//!
//! - [`parser`]: [`parse_report`], [`split_sections`], [`parse_scaling`], [`parse_optimization`], [`ParseError`].
//! - [`report`]: [`Reports`], [`Market`], [`MarketDeepDive`], [`OptimizationCategory`], [`Recommendation`].
//! - [`interview`]: [`QUESTIONS`], [`InterviewAnswers`].
//! - [`prompt`]: [`build_messages`], [`system_prompt`].
//! - [`llm`]: [`LlmClient`] trait, [`ChatOpenAI`], [`MockLlm`].
//! - [`service`]: [`ReportService`].
//! - [`contacts`]: [`simulated_contacts`] (deterministic placeholder contacts).
//! - [`geo`]: [`lookup`](geo::lookup), [`market_pins`] (country coordinates for map pins).
//!
//! ## Quick start
//!
//! ```rust
//! use mapleleap::parse_report;
//!
//! let reply = "# [OPTIMIZATION REPORT]\n### Marketing & Sales\n\
//!     * **CRM Software:** Helps track leads. **Examples:** [HubSpot, Zoho]\n";
//! let reports = parse_report(reply).unwrap();
//! let rec = &reports.optimization.categories[0].recommendations[0];
//! assert_eq!(rec.kind, "CRM Software");
//! assert_eq!(rec.examples, vec!["HubSpot", "Zoho"]);
//! assert!(reports.scaling.markets.is_empty());
//! ```

pub mod contacts;
pub mod error;
pub mod geo;
pub mod interview;
pub mod llm;
pub mod message;
pub mod parser;
pub mod prompt;
pub mod report;
pub mod service;

pub use contacts::{company_hash, simulated_contacts, Contact};
pub use error::ReportError;
pub use geo::{market_pins, Coordinates, MarketPin};
pub use interview::{InterviewAnswers, QUESTIONS};
pub use llm::{ChatOpenAI, LlmClient, LlmResponse, LlmUsage, MockLlm};
pub use message::Message;
pub use parser::{
    parse_optimization, parse_report, parse_scaling, split_sections, ParseError, Sections,
};
pub use prompt::{build_messages, system_prompt};
pub use report::{
    CategoryKind, Market, MarketDeepDive, OptimizationCategory, OptimizationReport,
    Recommendation, Reports, ScalingReport,
};
pub use service::ReportService;

/// Re-exported so callers can build [`ChatOpenAI::from_settings`] input without a direct dependency.
pub use env_config::LlmSettings;

/// When running `cargo test -p mapleleap`, initializes tracing from `RUST_LOG` so that
/// unit tests in `src/**` can print logs with `--nocapture`.
#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
