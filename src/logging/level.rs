//! Verbosity levels

/// Output verbosity for diagnostic logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Normal command output only
    Normal,
    /// Progress and decision logging
    Verbose,
    /// HTTP request/response logging (redacted)
    Debug,
}

impl LogLevel {
    /// Resolve the level from CLI flags and environment variables
    ///
    /// Flags win over `DIRADM_DEBUG` / `DIRADM_VERBOSE`.
    pub fn from_args_and_env(verbose: bool, debug: bool) -> Self {
        if debug || env_flag("DIRADM_DEBUG") {
            LogLevel::Debug
        } else if verbose || env_flag("DIRADM_VERBOSE") {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

fn env_flag(name: &str) -> bool {
    matches!(std::env::var(name).as_deref(), Ok("1") | Ok("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_select_level() {
        assert_eq!(LogLevel::from_args_and_env(false, false), LogLevel::Normal);
        assert_eq!(LogLevel::from_args_and_env(true, false), LogLevel::Verbose);
        assert_eq!(LogLevel::from_args_and_env(false, true), LogLevel::Debug);
        assert_eq!(LogLevel::from_args_and_env(true, true), LogLevel::Debug);
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug > LogLevel::Verbose);
        assert!(LogLevel::Verbose > LogLevel::Normal);
    }
}
