//! Response envelopes for the directory-service API
//!
//! Every endpoint answers `{ success, message?, error?, ...payload }`.

use crate::models::{Group, SearchEntry, User};
use serde::{Deserialize, Serialize};

/// Login request body
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Generic envelope with no payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResponse {
    /// Build a failure envelope from a local (transport) error
    pub fn transport_failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }

    /// Error or message text, with a generic fallback
    pub fn error_message(&self) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

/// Login response
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(rename = "sessionId", default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Single-user response
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Group list response
#[derive(Debug, Clone, Deserialize)]
pub struct GroupsResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub groups: Option<Vec<Group>>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Identity search response
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub entries: Option<Vec<SearchEntry>>,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub error: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_field() {
        let response = ApiResponse {
            success: false,
            message: Some("something".to_string()),
            error: Some("group not found".to_string()),
        };
        assert_eq!(response.error_message(), "group not found");
    }

    #[test]
    fn test_error_message_falls_back() {
        let response = ApiResponse {
            success: false,
            message: None,
            error: None,
        };
        assert_eq!(response.error_message(), "Unknown error");
    }

    #[test]
    fn test_login_response_deserialization() {
        let json = r#"{"success": true, "sessionId": "sess-1", "user": {
            "dn": "CN=Admin,DC=example,DC=com", "sAMAccountName": "admin", "enabled": true
        }}"#;
        let response: LoginResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.session_id.as_deref(), Some("sess-1"));
        assert!(response.user.is_some());
    }

    #[test]
    fn test_groups_response_missing_fields_default() {
        let json = r#"{"success": false, "error": "unauthorized"}"#;
        let response: GroupsResponse = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.groups.is_none());
        assert_eq!(response.count, 0);
    }
}
