//! Session storage abstraction

use crate::error::CliResult;

/// Trait for session token storage backends
///
/// Implementations are injected into the API client rather than reached
/// through a global, so concurrent sessions (and tests) stay isolated.
pub trait SessionStore: Send + Sync {
    /// Persist a session token, or clear it when `None`
    fn set(&self, token: Option<&str>) -> CliResult<()>;

    /// Load the current session token; `None` means unauthenticated
    fn get(&self) -> CliResult<Option<String>>;

    /// Check whether a token is currently stored
    fn exists(&self) -> bool {
        matches!(self.get(), Ok(Some(_)))
    }
}
