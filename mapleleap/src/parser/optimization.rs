//! Optimization zone: `### Category` blocks of `* **Type:** explanation. **Examples:** a, b` lines.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::sections::OPTIMIZATION_MARKER;
use crate::report::{OptimizationCategory, OptimizationReport, Recommendation};

static CATEGORY_HEADER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*### ").unwrap());
static RECOMMENDATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*[*-]\s+\*\*(.*?):\*\*\s(.*?)\.?\s+\*\*Examples:\*\*\s*(.*)").unwrap()
});

fn parse_recommendation(line: &str) -> Option<Recommendation> {
    let caps = RECOMMENDATION.captures(line)?;
    let examples = caps[3]
        .replace(['[', ']'], "")
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();
    Some(Recommendation {
        kind: caps[1].trim().to_string(),
        explanation: caps[2].trim().to_string(),
        examples,
    })
}

fn parse_category(block: &str) -> Option<OptimizationCategory> {
    let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
    let title = lines.next()?.to_string();
    let recommendations: Vec<Recommendation> = lines.filter_map(parse_recommendation).collect();
    if recommendations.is_empty() {
        debug!(title = %title, "category without recommendations, dropped");
        return None;
    }
    Some(OptimizationCategory {
        title,
        recommendations,
    })
}

/// Extracts the optimization report. Empty when the zone lacks its marker.
pub fn parse_optimization(zone: &str) -> OptimizationReport {
    if !zone.contains(OPTIMIZATION_MARKER) {
        return OptimizationReport::default();
    }
    let categories: Vec<OptimizationCategory> = CATEGORY_HEADER
        .split(zone)
        .skip(1)
        .filter_map(parse_category)
        .collect();
    debug!(categories = categories.len(), "optimization zone parsed");
    OptimizationReport { categories }
}
