//! Platform-specific configuration paths

use crate::config::SESSION_FILE_NAME;
use crate::error::{CliError, CliResult};
use std::path::PathBuf;

/// Configuration paths for the diradm CLI
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Base configuration directory
    pub config_dir: PathBuf,
    /// Path to config.json
    pub config_file: PathBuf,
    /// Path to session.json (persisted session token)
    pub session_file: PathBuf,
}

impl ConfigPaths {
    /// Get configuration paths for the current platform
    ///
    /// Paths:
    /// - Linux: ~/.config/diradm/
    /// - macOS: ~/Library/Application Support/diradm/
    /// - Windows: %APPDATA%\diradm\
    pub fn new() -> CliResult<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self::in_dir(config_dir))
    }

    /// Build paths rooted at an explicit directory (used by tests)
    pub fn in_dir(config_dir: PathBuf) -> Self {
        Self {
            config_file: config_dir.join("config.json"),
            session_file: config_dir.join(SESSION_FILE_NAME),
            config_dir,
        }
    }

    /// Get the configuration directory, respecting DIRADM_CONFIG_DIR env var
    fn get_config_dir() -> CliResult<PathBuf> {
        if let Ok(dir) = std::env::var("DIRADM_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let base_dir = dirs::config_dir().ok_or_else(|| {
            CliError::Config("Could not determine configuration directory".to_string())
        })?;

        Ok(base_dir.join("diradm"))
    }

    /// Ensure the configuration directory exists
    pub fn ensure_dir_exists(&self) -> CliResult<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }
}
