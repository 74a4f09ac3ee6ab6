//! Typed report model produced by [`parse_report`](crate::parser::parse_report).
//!
//! All values are created once by the parser and handed to the caller; nothing here is
//! mutated after construction. Serialized field names follow the camelCase wire shape
//! consumed by presentation layers (`deepDive`, `targetCompanies`, ...).

use serde::{Deserialize, Serialize};

/// Both reports produced from one model reply. Either side may be empty, never both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reports {
    pub scaling: ScalingReport,
    pub optimization: OptimizationReport,
}

impl Reports {
    /// True when neither report holds any entry.
    pub fn is_empty(&self) -> bool {
        self.scaling.markets.is_empty() && self.optimization.categories.is_empty()
    }
}

/// Recommended export markets in the order they appear in the reply. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalingReport {
    pub markets: Vec<Market>,
}

/// One export market with its opportunity score (0..=100) and action plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Market {
    pub country: String,
    pub score: u8,
    pub justification: String,
    pub deep_dive: MarketDeepDive,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDeepDive {
    pub target_companies: Vec<String>,
    pub distribution_partners: Vec<String>,
    pub outreach_email: String,
}

/// Tooling recommendations grouped by category; only non-empty categories are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub categories: Vec<OptimizationCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationCategory {
    pub title: String,
    pub recommendations: Vec<Recommendation>,
}

impl OptimizationCategory {
    pub fn kind(&self) -> CategoryKind {
        CategoryKind::from_title(&self.title)
    }
}

/// One software/technology suggestion: `* **Type:** explanation. **Examples:** a, b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub explanation: String,
    pub examples: Vec<String>,
}

/// Coarse classification of an optimization category title, used to pick a label or icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Operations,
    Marketing,
    CustomerService,
    Other,
}

impl CategoryKind {
    /// Classifies by case-insensitive substring; first of operations, marketing, customer wins.
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("operations") {
            Self::Operations
        } else if lower.contains("marketing") {
            Self::Marketing
        } else if lower.contains("customer") {
            Self::CustomerService
        } else {
            Self::Other
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Marketing => "marketing",
            Self::CustomerService => "customer service",
            Self::Other => "general",
        }
    }
}
