//! Configuration for MapleLeap.
//!
//! Two layers feed the process environment: the XDG `config.toml` `[env]` table and a
//! project `.env`. They are applied with priority **existing env > .env > XDG**, after
//! which [`LlmSettings::from_env`] resolves the model provider settings.

mod dotenv;
mod settings;
mod xdg_toml;

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

pub use settings::{LlmSettings, API_KEY_VARS, DEFAULT_MODEL};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Picks, for every key in either file, the value to export: `.env` first, then XDG.
/// Keys for which `is_set` returns true are left out (existing env wins).
fn merge_layers(
    dotenv_map: HashMap<String, String>,
    xdg_map: HashMap<String, String>,
    is_set: impl Fn(&str) -> bool,
) -> HashMap<String, String> {
    let mut merged = xdg_map;
    merged.extend(dotenv_map);
    merged.retain(|k, _| !is_set(k));
    merged
}

/// Loads `$XDG_CONFIG_HOME/<app_name>/config.toml` and `.env` (from `override_dir` or the
/// current directory) and sets only the variables not already present in the environment.
///
/// * `app_name`: e.g. `"mapleleap"`, used for the XDG path.
/// * `override_dir`: directory to read `.env` from instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<(), LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir).map_err(LoadError::DotenvRead)?;

    for (key, value) in merge_layers(dotenv_map, xdg_map, |k| std::env::var_os(k).is_some()) {
        std::env::set_var(&key, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn dotenv_overrides_xdg() {
        let merged = merge_layers(
            map(&[("OPENAI_API_KEY", "from_dotenv")]),
            map(&[("OPENAI_API_KEY", "from_xdg"), ("MAPLELEAP_MODEL", "gpt-4o")]),
            |_| false,
        );
        assert_eq!(merged["OPENAI_API_KEY"], "from_dotenv");
        assert_eq!(merged["MAPLELEAP_MODEL"], "gpt-4o");
    }

    #[test]
    fn existing_env_keys_are_skipped() {
        let merged = merge_layers(
            map(&[("A", "1")]),
            map(&[("B", "2")]),
            |k| k == "A",
        );
        assert!(!merged.contains_key("A"));
        assert_eq!(merged["B"], "2");
    }

    #[test]
    fn existing_env_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "MAPLELEAP_CFG_EXISTING=from_dotenv\n").unwrap();
        env::set_var("MAPLELEAP_CFG_EXISTING", "from_env");
        assert!(load_and_apply("mapleleap-config-test-none", Some(dir.path())).is_ok());
        assert_eq!(
            env::var("MAPLELEAP_CFG_EXISTING").as_deref(),
            Ok("from_env")
        );
        env::remove_var("MAPLELEAP_CFG_EXISTING");
    }

    #[test]
    fn dotenv_applied_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "MAPLELEAP_CFG_DOTENV=yes\n").unwrap();
        env::remove_var("MAPLELEAP_CFG_DOTENV");
        load_and_apply("mapleleap-config-test-none", Some(dir.path())).unwrap();
        assert_eq!(env::var("MAPLELEAP_CFG_DOTENV").as_deref(), Ok("yes"));
        env::remove_var("MAPLELEAP_CFG_DOTENV");
    }

    #[test]
    fn no_config_anywhere_is_ok() {
        let empty = tempfile::tempdir().unwrap();
        assert!(load_and_apply("mapleleap-config-test-none", Some(empty.path())).is_ok());
    }
}
