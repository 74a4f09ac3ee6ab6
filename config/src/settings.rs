//! Model provider settings resolved from the (already layered) environment.

/// Model used when neither `MAPLELEAP_MODEL` nor `OPENAI_MODEL` is set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// API key variables, in lookup order.
pub const API_KEY_VARS: [&str; 2] = ["OPENAI_API_KEY", "API_KEY"];

const BASE_URL_VARS: [&str; 2] = ["OPENAI_BASE_URL", "OPENAI_API_BASE"];
const MODEL_VARS: [&str; 2] = ["MAPLELEAP_MODEL", "OPENAI_MODEL"];
const TEMPERATURE_VAR: &str = "MAPLELEAP_TEMPERATURE";

/// Settings for the chat-completions client.
///
/// `api_key` stays optional here; the client constructor turns `None` into a
/// missing-credential error so callers can report it distinctly.
#[derive(Clone, Debug, PartialEq)]
pub struct LlmSettings {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: Option<f32>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
        }
    }
}

impl LlmSettings {
    /// Reads settings from the process environment. Call after [`crate::load_and_apply`].
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Reads settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|k| lookup(k))
                .map(|v| v.trim().to_string())
                .find(|v| !v.is_empty())
        };
        Self {
            api_key: first(&API_KEY_VARS[..]),
            base_url: first(&BASE_URL_VARS[..]),
            model: first(&MODEL_VARS[..]).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: first(&[TEMPERATURE_VAR][..]).and_then(|t| t.parse().ok()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let s = LlmSettings::from_lookup(lookup(&[]));
        assert_eq!(s, LlmSettings::default());
        assert_eq!(s.model, DEFAULT_MODEL);
    }

    #[test]
    fn primary_variables_win_over_fallbacks() {
        let s = LlmSettings::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-primary"),
            ("API_KEY", "sk-fallback"),
            ("MAPLELEAP_MODEL", "gpt-4o-mini"),
            ("OPENAI_MODEL", "other"),
            ("OPENAI_API_BASE", "http://localhost:11434/v1"),
        ]));
        assert_eq!(s.api_key.as_deref(), Some("sk-primary"));
        assert_eq!(s.model, "gpt-4o-mini");
        assert_eq!(s.base_url.as_deref(), Some("http://localhost:11434/v1"));
    }

    #[test]
    fn blank_key_falls_through_to_fallback() {
        let s = LlmSettings::from_lookup(lookup(&[("OPENAI_API_KEY", "  "), ("API_KEY", "k")]));
        assert_eq!(s.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn unparsable_temperature_is_ignored() {
        let s = LlmSettings::from_lookup(lookup(&[("MAPLELEAP_TEMPERATURE", "warm")]));
        assert_eq!(s.temperature, None);
        let s = LlmSettings::from_lookup(lookup(&[("MAPLELEAP_TEMPERATURE", "0.2")]));
        assert_eq!(s.temperature, Some(0.2));
    }

    #[test]
    fn with_model_overrides() {
        let s = LlmSettings::default().with_model("o3");
        assert_eq!(s.model, "o3");
    }
}
