//! Configuration management for the diradm CLI

mod paths;
mod settings;

pub use paths::ConfigPaths;
pub use settings::Config;

/// Storage key (file stem) under which the session token is persisted
pub const SESSION_FILE_NAME: &str = "session.json";
