//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Plex server configuration.
    pub plex: PlexConfig,
    /// Section titles to sort between.
    pub sections: SectionsConfig,
}

/// Plex server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlexConfig {
    /// Plex host.
    pub host: String,
    /// Plex API port.
    pub port: u16,
    /// API token.
    pub token: Option<String>,
    /// Request timeout in seconds.
    pub timeout: u64,
}

/// Section titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    /// Section to scan for watched videos.
    pub source: String,
    /// Section to sort videos into.
    pub target: String,
}

impl Default for PlexConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 32401,
            token: std::env::var("PLEX_TOKEN").ok().filter(|t| !t.is_empty()),
            timeout: 30,
        }
    }
}

impl PlexConfig {
    /// Base URL of the Plex HTTP API.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            source: "Unsorted".to_string(),
            target: "TV Shows".to_string(),
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("plex_sorter")
}

/// Load configuration from file.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring invalid config {}: {}", config_path.display(), e),
            },
            Err(e) => tracing::warn!("Unable to read config {}: {}", config_path.display(), e),
        }
    }

    Config::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.plex.host, "localhost");
        assert_eq!(config.plex.port, 32401);
        assert_eq!(config.sections.source, "Unsorted");
        assert_eq!(config.sections.target, "TV Shows");
        assert_eq!(config.plex.base_url(), "http://localhost:32401");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [plex]
            host = "nas.local"

            [sections]
            target = "Series"
            "#,
        )
        .unwrap();
        assert_eq!(config.plex.host, "nas.local");
        assert_eq!(config.plex.port, 32401);
        assert_eq!(config.sections.source, "Unsorted");
        assert_eq!(config.sections.target, "Series");
    }
}
