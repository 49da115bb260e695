//! CLI configuration settings persisted as config.json

use crate::config::ConfigPaths;
use crate::error::CliResult;
use serde::{Deserialize, Serialize};

/// Configuration for the diradm CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the directory-service REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Optional base DN used to scope bulk group listing
    #[serde(default)]
    pub base_dn: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "https://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            base_dn: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Load config from disk, falling back to defaults if absent
    pub fn load(paths: &ConfigPaths) -> CliResult<Self> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&paths.config_file)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self, paths: &ConfigPaths) -> CliResult<()> {
        paths.ensure_dir_exists()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&paths.config_file, contents)?;
        Ok(())
    }

    /// URL of the health endpoint
    pub fn health_url(&self) -> String {
        format!("{}/health", self.api_url)
    }
}
