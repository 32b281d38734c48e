use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The dashboard backend's default address.
pub const DEFAULT_SERVER: &str = "http://localhost:8001";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: Option<String>,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "evpark", "evpark")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolution order: CLI flag, config file, built-in default.
    pub fn server_url(&self, override_url: Option<String>) -> String {
        override_url
            .or_else(|| self.server.clone())
            .unwrap_or_else(|| DEFAULT_SERVER.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_url_resolution_order() {
        let config = Config {
            server: Some("http://configured:9000".to_string()),
        };
        assert_eq!(
            config.server_url(Some("http://flag:7000".to_string())),
            "http://flag:7000"
        );
        assert_eq!(config.server_url(None), "http://configured:9000");

        let empty = Config::default();
        assert_eq!(empty.server_url(None), DEFAULT_SERVER);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config {
            server: Some("http://localhost:8001".to_string()),
        };
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.server.as_deref(), Some("http://localhost:8001"));
    }
}
