//! Top-level split of a reply into the scaling zone and the optimization zone.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) const SCALING_MARKER: &str = "[SCALING REPORT]";
pub(crate) const OPTIMIZATION_MARKER: &str = "[OPTIMIZATION REPORT]";

/// A line made only of three or more hyphens (horizontal rule).
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^[ \t]*-{3,}[ \t]*\r?$").unwrap());

/// The two zones of a reply. Either may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub scaling: &'a str,
    pub optimization: &'a str,
}

/// Splits `markdown` on its first horizontal rule.
///
/// With a rule: the text before it is the scaling zone when it carries `[SCALING REPORT]`,
/// the text after it is the optimization zone when it carries `[OPTIMIZATION REPORT]`.
/// Without a rule: the whole document is the scaling zone only when it has the scaling
/// marker and not the optimization marker, and is the optimization zone whenever it has
/// the optimization marker.
pub fn split_sections(markdown: &str) -> Sections<'_> {
    match RULE.find(markdown) {
        Some(rule) => {
            let before = &markdown[..rule.start()];
            let after = &markdown[rule.end()..];
            Sections {
                scaling: if before.contains(SCALING_MARKER) { before } else { "" },
                optimization: if after.contains(OPTIMIZATION_MARKER) {
                    after
                } else {
                    ""
                },
            }
        }
        None => {
            let has_scaling = markdown.contains(SCALING_MARKER);
            let has_optimization = markdown.contains(OPTIMIZATION_MARKER);
            Sections {
                scaling: if has_scaling && !has_optimization {
                    markdown
                } else {
                    ""
                },
                optimization: if has_optimization { markdown } else { "" },
            }
        }
    }
}
