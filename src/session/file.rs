//! File-backed session storage

use crate::error::{CliError, CliResult};
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted session file contents
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    session_id: String,
}

/// Session store persisting the token to a JSON file in the config dir
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SessionStore for FileSessionStore {
    fn set(&self, token: Option<&str>) -> CliResult<()> {
        match token {
            Some(token) => {
                if let Some(parent) = self.path.parent() {
                    if !parent.exists() {
                        std::fs::create_dir_all(parent).map_err(|e| {
                            CliError::SessionStorage(format!(
                                "Failed to create session directory: {e}"
                            ))
                        })?;
                    }
                }
                let contents = serde_json::to_string(&SessionFile {
                    session_id: token.to_string(),
                })?;
                std::fs::write(&self.path, contents).map_err(|e| {
                    CliError::SessionStorage(format!("Failed to write session file: {e}"))
                })
            }
            None => {
                if self.path.exists() {
                    std::fs::remove_file(&self.path).map_err(|e| {
                        CliError::SessionStorage(format!("Failed to delete session file: {e}"))
                    })?;
                }
                Ok(())
            }
        }
    }

    fn get(&self) -> CliResult<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)
            .map_err(|e| CliError::SessionStorage(format!("Failed to read session file: {e}")))?;
        let session: SessionFile = serde_json::from_str(&contents)?;
        Ok(Some(session.session_id))
    }
}
