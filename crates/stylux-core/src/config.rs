use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, StyluxError};

/// Default URL of the recommendation endpoint.
pub const DEFAULT_REMOTE_ENDPOINT: &str = "http://localhost:5000/api/recommend";

/// Top-level configuration for Stylux.
///
/// Loaded from `~/.stylux/config.toml` by default. Every section falls back
/// to its defaults when missing, so an empty file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyluxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub local: LocalConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl StyluxConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: StyluxConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults if the file is missing
    /// or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| StyluxError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Which reply resolver the chat uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverStrategy {
    /// POST to the recommendation endpoint.
    #[default]
    Remote,
    /// Match against the built-in rule table.
    Local,
}

/// Chat behaviour.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub strategy: ResolverStrategy,
}

/// Remote resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// Full URL of the recommendation endpoint.
    pub endpoint: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REMOTE_ENDPOINT.to_string(),
            timeout_secs: None,
        }
    }
}

/// Local rule-table resolver settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalConfig {
    /// Delay before a canned reply is returned, emulating a network round trip.
    pub simulated_latency_ms: u64,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 1000,
        }
    }
}

/// Recommendation server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port to bind on 127.0.0.1.
    pub port: u16,
    /// Origins allowed by CORS (the front end dev server).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://127.0.0.1:5173".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = StyluxConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.chat.strategy, ResolverStrategy::Remote);
        assert_eq!(config.remote.endpoint, DEFAULT_REMOTE_ENDPOINT);
        assert!(config.remote.timeout_secs.is_none());
        assert_eq!(config.local.simulated_latency_ms, 1000);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.allowed_origins.len(), 2);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"

[chat]
strategy = "local"

[remote]
endpoint = "http://10.0.0.2:8080/api/recommend"
timeout_secs = 5

[local]
simulated_latency_ms = 0

[server]
port = 7000
allowed_origins = ["https://stylux.example"]
"#;
        let file = create_temp_config(content);
        let config = StyluxConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.chat.strategy, ResolverStrategy::Local);
        assert_eq!(config.remote.endpoint, "http://10.0.0.2:8080/api/recommend");
        assert_eq!(config.remote.timeout_secs, Some(5));
        assert_eq!(config.local.simulated_latency_ms, 0);
        assert_eq!(config.server.port, 7000);
        assert_eq!(config.server.allowed_origins, vec!["https://stylux.example"]);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = create_temp_config("[chat]\nstrategy = \"local\"\n");
        let config = StyluxConfig::load(file.path()).unwrap();
        assert_eq!(config.chat.strategy, ResolverStrategy::Local);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.local.simulated_latency_ms, 1000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = StyluxConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.remote.endpoint, DEFAULT_REMOTE_ENDPOINT);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let file = create_temp_config("[chat]\nstrategy = \"telepathy\"\n");
        let result = StyluxConfig::load(file.path());
        assert!(matches!(result, Err(StyluxError::Config(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        assert!(StyluxConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = StyluxConfig::load_or_default(Path::new("/nonexistent/stylux.toml"));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = StyluxConfig::default();
        config.chat.strategy = ResolverStrategy::Local;
        config.remote.timeout_secs = Some(3);
        config.save(&path).unwrap();

        let reloaded = StyluxConfig::load(&path).unwrap();
        assert_eq!(reloaded.chat.strategy, ResolverStrategy::Local);
        assert_eq!(reloaded.remote.timeout_secs, Some(3));
    }
}
