//! Plain-text rendering of reports and contacts for stdout.
//!
//! Long free-text fields (justification, outreach email, explanations) can be capped with
//! `max_len`; 0 means no truncation.

use mapleleap::geo;
use mapleleap::{Contact, Market, OptimizationReport, Reports, ScalingReport};

const INDENT: &str = "   ";

/// Truncates a string to at most `max` chars; appends "..." when truncated. UTF-8 safe.
/// `max == 0` returns `s` unchanged.
pub fn truncate_display(s: &str, max: usize) -> String {
    const SUFFIX: &str = "...";
    let suffix_len = 3;
    if max == 0 || s.chars().count() <= max {
        return s.to_string();
    }
    if max <= suffix_len {
        return s.chars().take(max).collect();
    }
    format!(
        "{}{}",
        s.chars().take(max - suffix_len).collect::<String>(),
        SUFFIX
    )
}

fn push_list(lines: &mut Vec<String>, heading: &str, items: &[String]) {
    lines.push(format!("{}{}:", INDENT, heading));
    if items.is_empty() {
        lines.push(format!("{}{}(none)", INDENT, INDENT));
    }
    for item in items {
        lines.push(format!("{}{}- {}", INDENT, INDENT, item));
    }
}

fn render_market(index: usize, market: &Market, max_len: usize, lines: &mut Vec<String>) {
    let pin = geo::lookup(&market.country)
        .map(|c| format!("  @ {:.2}, {:.2}", c.lat, c.lon))
        .unwrap_or_default();
    lines.push(format!(
        "{}. {} ({}/100){}",
        index + 1,
        market.country,
        market.score,
        pin
    ));
    if !market.justification.is_empty() {
        lines.push(format!(
            "{}{}",
            INDENT,
            truncate_display(&market.justification, max_len)
        ));
    }
    push_list(lines, "Target companies", &market.deep_dive.target_companies);
    push_list(
        lines,
        "Distribution partners",
        &market.deep_dive.distribution_partners,
    );
    lines.push(format!("{}Outreach email:", INDENT));
    for l in truncate_display(&market.deep_dive.outreach_email, max_len).lines() {
        lines.push(format!("{}{}{}", INDENT, INDENT, l.trim_end()));
    }
}

fn render_scaling(report: &ScalingReport, max_len: usize, lines: &mut Vec<String>) {
    lines.push("== Scaling Report ==".to_string());
    if report.markets.is_empty() {
        lines.push("(no markets)".to_string());
    }
    for (i, market) in report.markets.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        render_market(i, market, max_len, lines);
    }
}

fn render_optimization(report: &OptimizationReport, max_len: usize, lines: &mut Vec<String>) {
    lines.push("== Optimization Report ==".to_string());
    if report.categories.is_empty() {
        lines.push("(no recommendations)".to_string());
    }
    for category in &report.categories {
        lines.push(format!("{} [{}]", category.title, category.kind().label()));
        for rec in &category.recommendations {
            lines.push(format!(
                "{}- {}: {}",
                INDENT,
                rec.kind,
                truncate_display(&rec.explanation, max_len)
            ));
            if !rec.examples.is_empty() {
                lines.push(format!(
                    "{}{}Examples: {}",
                    INDENT,
                    INDENT,
                    rec.examples.join(", ")
                ));
            }
        }
    }
}

/// Both reports as text, scaling first.
pub fn render_reports(reports: &Reports, max_len: usize) -> String {
    let mut lines = Vec::new();
    render_scaling(&reports.scaling, max_len, &mut lines);
    lines.push(String::new());
    render_optimization(&reports.optimization, max_len, &mut lines);
    lines.join("\n")
}

/// One line per contact, under a header naming the company.
pub fn render_contacts(company: &str, contacts: &[Contact]) -> String {
    let mut lines = vec![format!("Decision makers at {} (simulated):", company)];
    for c in contacts {
        lines.push(format!("{}{} | {} | {}", INDENT, c.name, c.title, c.email));
    }
    lines.join("\n")
}
