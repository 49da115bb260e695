//! Sensitive data redaction for log output

/// Replacement text for redacted values
pub const REDACTED: &str = "[REDACTED]";

/// Redacts sensitive values before they reach log output
pub struct Redactor;

impl Redactor {
    /// Mask a session token, keeping a short prefix for correlation
    pub fn token(token: &str) -> String {
        if token.chars().count() <= 4 {
            REDACTED.to_string()
        } else {
            let prefix: String = token.chars().take(4).collect();
            format!("{prefix}…")
        }
    }
}
