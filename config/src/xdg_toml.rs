//! `[env]` table from `$XDG_CONFIG_HOME/<app>/config.toml`.

use std::collections::HashMap;
use std::path::Path;

use crate::LoadError;

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Reads `<config_home>/<app_name>/config.toml`; a missing file is an empty map.
fn load_env_map_from(config_home: &Path, app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let path = config_home.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}

pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let base = cross_xdg::BaseDirs::new().map_err(|e| LoadError::XdgPath(e.to_string()))?;
    load_env_map_from(&base.config_home(), app_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(home: &Path, app: &str, body: &str) {
        let dir = home.join(app);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), body).unwrap();
    }

    #[test]
    fn missing_config_returns_empty_map() {
        let home = tempfile::tempdir().unwrap();
        assert!(load_env_map_from(home.path(), "mapleleap").unwrap().is_empty());
    }

    #[test]
    fn reads_env_table() {
        let home = tempfile::tempdir().unwrap();
        write_config(
            home.path(),
            "mapleleap",
            "[env]\nOPENAI_API_KEY = \"sk-xdg\"\nMAPLELEAP_MODEL = \"gpt-4o-mini\"\n",
        );
        let map = load_env_map_from(home.path(), "mapleleap").unwrap();
        assert_eq!(map["OPENAI_API_KEY"], "sk-xdg");
        assert_eq!(map["MAPLELEAP_MODEL"], "gpt-4o-mini");
    }

    #[test]
    fn other_tables_are_ignored() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "mapleleap", "[other]\nkey = \"ignored\"\n");
        assert!(load_env_map_from(home.path(), "mapleleap").unwrap().is_empty());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let home = tempfile::tempdir().unwrap();
        write_config(home.path(), "mapleleap", "not valid toml [[[\n");
        let result = load_env_map_from(home.path(), "mapleleap");
        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}
