//! Simulated decision-maker contacts for a target company.
//!
//! Demonstrates what a contact-enrichment integration would return. Output is derived
//! from a character-sum hash of the company name, so the same company always gets the
//! same contacts; there is no randomness.

use serde::{Deserialize, Serialize};

const ROSTER: [(&str, &str); 4] = [
    ("Alex Chen", "Procurement Manager"),
    ("Maria Garcia", "Head of Supply Chain"),
    ("John Smith", "Senior Buyer"),
    ("Priya Patel", "Director of Operations"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub title: String,
    pub email: String,
}

/// Sum of the UTF-16 code units of `company`.
pub fn company_hash(company: &str) -> u64 {
    company.encode_utf16().map(u64::from).sum()
}

/// `alex chen` at `Acme Corp.` → `a.chen@acmecorp.com`.
fn email_for(name: &str, company: &str) -> String {
    let mut parts = name.split_whitespace();
    let first_initial = parts
        .next()
        .and_then(|f| f.chars().next())
        .map(String::from)
        .unwrap_or_default();
    let last = parts.next().unwrap_or_default();
    let user = format!("{}.{}", first_initial, last).to_lowercase();
    let domain: String = company
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();
    format!("{}@{}.com", user, domain)
}

/// Two or three contacts for `company`, chosen and ordered by [`company_hash`].
pub fn simulated_contacts(company: &str) -> Vec<Contact> {
    let hash = company_hash(company);
    let sort_key = |name: &str| {
        let first = name.encode_utf16().next().map(u64::from).unwrap_or(0);
        first.wrapping_mul(hash) % 10
    };

    let mut roster = ROSTER.to_vec();
    roster.sort_by_key(|(name, _)| sort_key(name));

    let count = 2 + (hash % 2) as usize;
    roster
        .into_iter()
        .take(count)
        .map(|(name, title)| Contact {
            name: name.to_string(),
            title: title.to_string(),
            email: email_for(name, company),
        })
        .collect()
}
