//! Scaling zone: market headers, their justification, and the per-market deep dives.
//!
//! Headers (`### Market N: Country | 82/100`) and deep dives (`### Details for Country`)
//! are two independent block sequences. A deep dive is paired with a header by country
//! name first, and by position only when no name match exists and the positional block
//! does not belong to another parsed market.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::bullets::bullet_items;
use super::sections::SCALING_MARKER;
use crate::report::{Market, MarketDeepDive, ScalingReport};

const COMPANIES_LABEL: &str = "Top B2B Companies to Target";
const PARTNERS_LABEL: &str = "Top Distribution/Sales Partners";
const EMAIL_LABEL: &str = "Initial Outreach Email Draft";

static MARKET_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*### Market \d+:").unwrap());
static DETAILS_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*### Details for").unwrap());
static COUNTRY_SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(.*?)[ \t]*\|[ \t]*(\d+)/100").unwrap());
static JUSTIFICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*Justification:\*\*[ \t]*").unwrap());
/// First terminator of a justification: a following `###` line or a blank line.
static JUSTIFICATION_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n###|\n[ \t]*\r?\n").unwrap());

/// Country, score and justification read from one header block.
#[derive(Debug)]
struct MarketHeader {
    country: String,
    score: u8,
    justification: String,
}

/// One `### Details for` block split into lines, with the name that follows the marker.
#[derive(Debug)]
struct DeepDiveBlock<'a> {
    name: String,
    lines: Vec<&'a str>,
}

/// Text following each match of `delimiter`, in order; the preamble before the first match is dropped.
fn blocks_after<'a>(zone: &'a str, delimiter: &Regex) -> Vec<&'a str> {
    delimiter.split(zone).skip(1).collect()
}

fn parse_header(block: &str) -> Option<MarketHeader> {
    let caps = COUNTRY_SCORE.captures(block)?;
    let country = caps[1].trim();
    if country.is_empty() {
        return None;
    }
    let score: u8 = caps[2].parse().ok().filter(|s| *s <= 100)?;
    Some(MarketHeader {
        country: country.to_string(),
        score,
        justification: parse_justification(block),
    })
}

fn parse_justification(block: &str) -> String {
    let Some(label) = JUSTIFICATION.find(block) else {
        return String::new();
    };
    let rest = &block[label.end()..];
    let end = JUSTIFICATION_END
        .find(rest)
        .map(|m| m.start())
        .unwrap_or(rest.len());
    rest[..end].lines().collect::<Vec<_>>().join("\n").trim().to_string()
}

fn parse_deep_dive_block(block: &str) -> DeepDiveBlock<'_> {
    let lines: Vec<&str> = block.lines().collect();
    let name = lines
        .first()
        .map(|l| {
            l.trim()
                .trim_end_matches(':')
                .trim_matches(|c: char| c == '[' || c == ']' || c == '*' || c.is_whitespace())
                .to_string()
        })
        .unwrap_or_default();
    DeepDiveBlock { name, lines }
}

/// Lines strictly between two label lines; empty when the labels are out of order.
fn between<'a>(lines: &'a [&'a str], from: usize, to: usize) -> &'a [&'a str] {
    lines.get(from + 1..to).unwrap_or(&[])
}

/// Reads the three labeled subsections; `None` unless all three labels are present.
fn extract_deep_dive(lines: &[&str]) -> Option<MarketDeepDive> {
    let find = |label: &str| lines.iter().position(|l| l.contains(label));
    let companies = find(COMPANIES_LABEL)?;
    let partners = find(PARTNERS_LABEL)?;
    let email = find(EMAIL_LABEL)?;

    Some(MarketDeepDive {
        target_companies: bullet_items(between(lines, companies, partners).iter().copied()),
        distribution_partners: bullet_items(between(lines, partners, email).iter().copied()),
        outreach_email: lines[email + 1..].join("\n").trim().to_string(),
    })
}

/// Index of the deep dive for the header at `position` whose country is `country`.
fn pick_deep_dive(
    position: usize,
    country: &str,
    dives: &[DeepDiveBlock<'_>],
    claimed: &[bool],
    known_countries: &[String],
) -> Option<usize> {
    let by_name = dives
        .iter()
        .enumerate()
        .find(|(i, d)| !claimed[*i] && d.name.eq_ignore_ascii_case(country))
        .map(|(i, _)| i);
    if by_name.is_some() {
        return by_name;
    }

    let dive = dives.get(position)?;
    let belongs_elsewhere = !dive.name.is_empty()
        && known_countries
            .iter()
            .any(|c| c.eq_ignore_ascii_case(&dive.name));
    if claimed[position] || belongs_elsewhere {
        None
    } else {
        Some(position)
    }
}

/// Extracts the scaling report from the scaling zone. Empty when the zone lacks its marker.
pub fn parse_scaling(zone: &str) -> ScalingReport {
    if !zone.contains(SCALING_MARKER) {
        return ScalingReport::default();
    }

    let headers: Vec<Option<MarketHeader>> = blocks_after(zone, &MARKET_HEADER)
        .into_iter()
        .map(parse_header)
        .collect();
    let dives: Vec<DeepDiveBlock<'_>> = blocks_after(zone, &DETAILS_HEADER)
        .into_iter()
        .map(parse_deep_dive_block)
        .collect();
    let known_countries: Vec<String> = headers
        .iter()
        .flatten()
        .map(|h| h.country.clone())
        .collect();

    debug!(
        headers = headers.len(),
        deep_dives = dives.len(),
        "scaling zone blocks"
    );

    let mut claimed = vec![false; dives.len()];
    let mut markets = Vec::new();
    for (position, header) in headers.into_iter().enumerate() {
        let Some(header) = header else {
            debug!(position, "market header without `Country | N/100`, dropped");
            continue;
        };
        let Some(idx) = pick_deep_dive(
            position,
            &header.country,
            &dives,
            &claimed,
            &known_countries,
        ) else {
            debug!(country = %header.country, "no deep dive for market, dropped");
            continue;
        };
        claimed[idx] = true;
        let Some(deep_dive) = extract_deep_dive(&dives[idx].lines) else {
            debug!(country = %header.country, "deep dive missing a subsection, dropped");
            continue;
        };
        markets.push(Market {
            country: header.country,
            score: header.score,
            justification: header.justification,
            deep_dive,
        });
    }

    ScalingReport { markets }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str, companies: &[&str]) -> String {
        let mut s = format!("### Details for {name}\n*   **Top B2B Companies to Target:**\n");
        for c in companies {
            s.push_str(&format!("    *   {c}\n"));
        }
        s.push_str("*   **Top Distribution/Sales Partners:**\n    *   Partner\n");
        s.push_str(&format!("*   **Initial Outreach Email Draft:**\n    Dear {name} team,\n"));
        s
    }

    #[test]
    fn header_parses_country_score_and_justification() {
        let h = parse_header(" Germany | 82/100\n**Justification:** Large market.\nMore.\n\n## Next")
            .unwrap();
        assert_eq!(h.country, "Germany");
        assert_eq!(h.score, 82);
        assert_eq!(h.justification, "Large market.\nMore.");
    }

    #[test]
    fn justification_stops_at_next_heading() {
        let j = parse_justification("**Justification:** Good fit.\n### Market 2: X | 1/100");
        assert_eq!(j, "Good fit.");
    }

    #[test]
    fn crlf_justification_uses_plain_newlines() {
        let j = parse_justification("**Justification:** Big.\r\nMore.\r\n\r\n### Details for X");
        assert_eq!(j, "Big.\nMore.");
    }

    #[test]
    fn missing_justification_is_empty() {
        let h = parse_header(" Japan | 70/100\n").unwrap();
        assert_eq!(h.justification, "");
    }

    #[test]
    fn header_rejects_bad_scores() {
        assert!(parse_header(" Japan | high/100").is_none());
        assert!(parse_header(" Japan | 8.5/100").is_none());
        assert!(parse_header(" Japan | 101/100").is_none());
        assert!(parse_header(" Japan | 99999999999/100").is_none());
        assert!(parse_header(" Japan").is_none());
        assert!(parse_header(" | 50/100").is_none());
    }

    #[test]
    fn deep_dive_name_is_cleaned() {
        let d = parse_deep_dive_block(" [Germany]:\nrest");
        assert_eq!(d.name, "Germany");
        let d = parse_deep_dive_block(" **Japan**\n");
        assert_eq!(d.name, "Japan");
    }

    #[test]
    fn deep_dive_with_out_of_order_labels_yields_empty_lists() {
        let lines = vec![
            "Initial Outreach Email Draft:",
            "Hello",
            "Top Distribution/Sales Partners",
            "* P",
            "Top B2B Companies to Target",
            "* C",
        ];
        let dd = extract_deep_dive(&lines).unwrap();
        assert!(dd.target_companies.is_empty());
        assert!(dd.distribution_partners.is_empty());
        assert!(dd.outreach_email.starts_with("Hello"));
    }

    #[test]
    fn zone_without_marker_is_empty() {
        let zone = format!("### Market 1: Germany | 82/100\n{}", details("Germany", &["A"]));
        assert!(parse_scaling(&zone).markets.is_empty());
    }

    #[test]
    fn pairs_by_name_when_deep_dives_are_shuffled() {
        let zone = format!(
            "[SCALING REPORT]\n### Market 1: Germany | 82/100\n### Market 2: Japan | 70/100\n{}{}",
            details("Japan", &["Sony"]),
            details("Germany", &["Siemens"]),
        );
        let report = parse_scaling(&zone);
        assert_eq!(report.markets.len(), 2);
        assert_eq!(report.markets[0].country, "Germany");
        assert_eq!(report.markets[0].deep_dive.target_companies, vec!["Siemens"]);
        assert_eq!(report.markets[1].deep_dive.target_companies, vec!["Sony"]);
    }

    #[test]
    fn positional_fallback_skips_blocks_naming_other_markets() {
        let zone = format!(
            "[SCALING REPORT]\n### Market 1: Germany | 82/100\n### Market 2: France | 60/100\n### Market 3: Japan | 70/100\n{}{}",
            details("Germany", &["Siemens"]),
            details("Japan", &["Sony"]),
        );
        let report = parse_scaling(&zone);
        let countries: Vec<&str> = report.markets.iter().map(|m| m.country.as_str()).collect();
        assert_eq!(countries, vec!["Germany", "Japan"]);
    }
}
