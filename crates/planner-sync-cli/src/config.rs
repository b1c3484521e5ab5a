use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Base URL of the orchestrator's REST API.
    pub orchestrator_url: String,
    /// Environment variable holding the orchestrator API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_key_env() -> String {
    "PLANNER_SYNC_API_KEY".into()
}

/// Default config path: `~/.config/planner-sync/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("planner-sync").join("config.toml"))
}

/// Load config from an explicit path, or the default location when none is
/// given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path = match path {
        Some(p) => p.to_owned(),
        None => config_path().context("could not determine a config directory")?,
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;

    toml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let config: AppConfig =
            toml::from_str(r#"orchestrator_url = "https://orchestrator.example.org""#).unwrap();

        assert_eq!(config.orchestrator_url, "https://orchestrator.example.org");
        assert_eq!(config.api_key_env, "PLANNER_SYNC_API_KEY");
    }

    #[test]
    fn api_key_env_can_be_overridden() {
        let config: AppConfig = toml::from_str(
            r#"
            orchestrator_url = "https://orchestrator.example.org"
            api_key_env = "ROBOT_KEY"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_key_env, "ROBOT_KEY");
    }

    #[test]
    fn missing_url_is_a_parse_error() {
        let result = toml::from_str::<AppConfig>("api_key_env = \"ROBOT_KEY\"");
        assert!(result.is_err());
    }
}
