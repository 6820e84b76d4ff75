use std::{collections::HashSet, path::Path};

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "plugin_host.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Plugin name, used as the fallback prefix of every registered command.
    pub plugin: String,
    pub log_level: LevelFilter,
    pub players: Vec<PlayerConfig>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            plugin: "myplugin".to_string(),
            log_level: LevelFilter::Info,
            players: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub permissions: HashSet<String>,
}

impl HostConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: HostConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            other => other,
        }
    }

    pub fn player(&self, name: &str) -> Option<&PlayerConfig> {
        self.players.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_players_and_level() {
        let config: HostConfig = toml::from_str(
            r#"
            plugin = "warps"
            log_level = "debug"

            [[players]]
            name = "Ari"
            permissions = ["myplugin.example", "myplugin.example.sub"]

            [[players]]
            name = "Sam"
            "#,
        )
        .unwrap();

        assert_eq!(config.plugin, "warps");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(config.player("ari").unwrap().permissions.contains("myplugin.example.sub"));
        assert!(config.player("Sam").unwrap().permissions.is_empty());
        assert!(config.player("Nobody").is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config: HostConfig = toml::from_str("").unwrap();
        assert_eq!(config.plugin, "myplugin");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.players.is_empty());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let config = HostConfig::load_or_default("does/not/exist.toml").unwrap();
        assert_eq!(config.plugin, "myplugin");
    }
}
