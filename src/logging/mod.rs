//! Verbose/debug logging for the diradm CLI
//!
//! Provides configurable verbosity (`-v`, `--debug`, or the `DIRADM_VERBOSE`
//! / `DIRADM_DEBUG` environment variables) with automatic redaction of
//! session tokens in HTTP logging. Output goes to stderr so it never mixes
//! with command output.

mod level;
mod redaction;

pub use level::LogLevel;
pub use redaction::{Redactor, REDACTED};

use std::sync::OnceLock;

static LEVEL: OnceLock<LogLevel> = OnceLock::new();

/// Initialize the process-wide log level; later calls are ignored
pub fn init(level: LogLevel) {
    let _ = LEVEL.set(level);
}

/// Current log level (Normal until initialized)
pub fn level() -> LogLevel {
    LEVEL.get().copied().unwrap_or(LogLevel::Normal)
}

/// Log a progress message at Verbose level or above
pub fn verbose(message: &str) {
    if level() >= LogLevel::Verbose {
        eprintln!("[verbose] {message}");
    }
}

/// Log an outbound HTTP request at Debug level
pub fn debug_http_request(method: &str, url: &str, session: Option<&str>) {
    if level() >= LogLevel::Debug {
        match session {
            Some(token) => {
                let masked = Redactor::token(token);
                eprintln!("[debug] → {method} {url} (X-Session-ID: {masked})");
            }
            None => eprintln!("[debug] → {method} {url}"),
        }
    }
}

/// Log an HTTP response status at Debug level
pub fn debug_http_response(url: &str, status: u16) {
    if level() >= LogLevel::Debug {
        eprintln!("[debug] ← {status} {url}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_defaults_to_normal() {
        // init() may already have run in another test; either way the
        // accessor must return a value without panicking.
        let _ = level();
    }
}
