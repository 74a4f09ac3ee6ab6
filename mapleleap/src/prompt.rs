//! Prompt assembly for report generation.
//!
//! The system message fixes the markdown layout the parser reads (section markers,
//! `### Market N:` headers, `### Details for` blocks, `### Category` bullet lines); keep
//! [`REPORT_TEMPLATE`] and [`crate::parser`] in step.

use crate::message::Message;

/// Persona and task statement placed before the template.
pub const CONSULTANT_PERSONA: &str = "You are 'MapleLeap AI', an expert AI consultant for Canadian businesses, \
specializing in international trade, sales, and business technology. Your primary function is to create \
actionable, data-driven reports from a single user query.

**Task:**
First, meticulously analyze the user's text to understand their product, location, industry, and value \
proposition. Then, generate two distinct reports in a single Markdown response, following this exact \
structure for easy parsing.";

/// Markdown layout the model must reproduce.
pub const REPORT_TEMPLATE: &str = r#"# [SCALING REPORT]

## Top 3 Recommended Export Markets
Analyze the user's profile and identify the top 3 most promising export markets. For each, provide a 2-3 sentence justification and an 'Opportunity Score' out of 100.

### Market 1: [Country Name] | [Score]/100
**Justification:** [2-3 sentences explaining why this market is a good fit, based on demand, competition, cultural fit, etc.]

### Market 2: [Country Name] | [Score]/100
**Justification:** [Justification text]

### Market 3: [Country Name] | [Score]/100
**Justification:** [Justification text]

## Market Deep Dive
For EACH of the 3 markets above, provide a detailed action plan:

### Details for [Market 1 Name]
*   **Top B2B Companies to Target:**
    *   [Company Name 1]
    *   [Company Name 2]
*   **Top Distribution/Sales Partners:**
    *   [Partner Name 1]
    *   [Partner Name 2]
*   **Initial Outreach Email Draft:**
    [Generate a concise, professional, culturally-aware email template under 100 words for this specific market. The tone should be formal and direct.]

### Details for [Market 2 Name]
(same three subsections)

### Details for [Market 3 Name]
(same three subsections)

---

# [OPTIMIZATION REPORT]

## AI-Powered Productivity Recommendations
Based on the user's industry, provide specific software and technology recommendations.

### Operations & Supply Chain
*   **[Software/Tech Type 1]:** [Explain in one sentence how it helps this specific user's business]. **Examples:** Company A, Company B.
*   **[Software/Tech Type 2]:** [Explanation]. **Examples:** Company C, Company D.

### Marketing & Sales
*   **[Software/Tech Type 1]:** [Explanation]. **Examples:** Company E, Company F.
*   **[Software/Tech Type 2]:** [Explanation]. **Examples:** Company G, Company H.

### Customer Service
*   **[Software/Tech Type 1]:** [Explanation]. **Examples:** Company I, Company J.
"#;

/// Full system prompt: persona, then the template.
pub fn system_prompt() -> String {
    format!(
        "{}\n\n**Generate the full report using this precise Markdown format:**\n\n{}",
        CONSULTANT_PERSONA, REPORT_TEMPLATE
    )
}

/// Messages for one report request: system instructions, then the user's description.
pub fn build_messages(user_input: &str) -> Vec<Message> {
    vec![
        Message::system(system_prompt()),
        Message::user(format!("**User's Input:**\n\"{}\"", user_input.trim())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{split_sections, Sections};

    #[test]
    fn build_messages_has_system_then_user() {
        let msgs = build_messages("  We sell maple syrup.  ");
        assert_eq!(msgs.len(), 2);
        assert!(matches!(&msgs[0], Message::System(s) if s.contains("MapleLeap AI")));
        assert!(matches!(&msgs[1], Message::User(s) if s.ends_with("\"We sell maple syrup.\"")));
    }

    #[test]
    fn template_carries_both_markers_around_a_rule() {
        let Sections {
            scaling,
            optimization,
        } = split_sections(REPORT_TEMPLATE);
        assert!(scaling.contains("### Market 1:"));
        assert!(optimization.contains("**Examples:**"));
    }
}
