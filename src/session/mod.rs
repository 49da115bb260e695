//! Session token storage
//!
//! The session token is an opaque string issued at login. It is persisted to
//! durable storage so a new process resumes the same session, attached to
//! every outbound request as `X-Session-ID`, and cleared on logout or on any
//! authentication rejection. Expiry is never checked locally; the server is
//! the only authority.

mod file;
mod memory;
mod store;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
pub use store::SessionStore;

use crate::config::ConfigPaths;
use std::sync::Arc;

/// Get the session store backend for the given paths
pub fn get_session_store(paths: &ConfigPaths) -> Arc<dyn SessionStore> {
    Arc::new(FileSessionStore::new(paths.session_file.clone()))
}
