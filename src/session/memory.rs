//! In-memory session storage for tests and ephemeral sessions

use crate::error::{CliError, CliResult};
use crate::session::SessionStore;
use std::sync::Mutex;

/// Session store holding the token in memory only
#[derive(Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn set(&self, token: Option<&str>) -> CliResult<()> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| CliError::SessionStorage("Failed to lock session store".to_string()))?;
        *guard = token.map(String::from);
        Ok(())
    }

    fn get(&self) -> CliResult<Option<String>> {
        let guard = self
            .token
            .lock()
            .map_err(|_| CliError::SessionStorage("Failed to lock session store".to_string()))?;
        Ok(guard.clone())
    }
}
