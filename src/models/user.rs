//! Identity (user) model
//!
//! An immutable snapshot of a directory identity as the server reports it.
//! `member_of` is the server's view of group membership at fetch time; it is
//! never patched field-by-field, only replaced by a wholesale re-fetch.

use serde::{Deserialize, Serialize};

/// A directory identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Distinguished name (unique)
    pub dn: String,

    /// Account name (unique, used as the API key for membership mutations)
    #[serde(rename = "sAMAccountName")]
    pub sam_account_name: String,

    #[serde(rename = "userPrincipalName", default)]
    pub user_principal_name: Option<String>,

    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,

    #[serde(rename = "givenName", default)]
    pub given_name: Option<String>,

    /// Surname
    #[serde(default)]
    pub sn: Option<String>,

    #[serde(default)]
    pub mail: Option<String>,

    #[serde(default)]
    pub department: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub manager: Option<String>,

    /// DNs of the groups the server currently reports as containing this identity
    #[serde(rename = "memberOf", default)]
    pub member_of: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "telephoneNumber", default)]
    pub telephone_number: Option<String>,

    #[serde(default)]
    pub mobile: Option<String>,

    #[serde(rename = "employeeID", default)]
    pub employee_id: Option<String>,

    #[serde(default)]
    pub company: Option<String>,

    #[serde(rename = "whenCreated", default)]
    pub when_created: Option<String>,

    #[serde(rename = "whenChanged", default)]
    pub when_changed: Option<String>,

    #[serde(default)]
    pub enabled: bool,

    #[serde(rename = "accountExpires", default)]
    pub account_expires: Option<String>,

    #[serde(rename = "passwordExpiryDate", default)]
    pub password_expiry_date: Option<String>,
}

impl User {
    /// Best display label for the identity
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or(&self.sam_account_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_ldap_field_names() {
        let json = r#"{
            "dn": "CN=Jane Doe,OU=Users,DC=example,DC=com",
            "sAMAccountName": "jdoe",
            "displayName": "Jane Doe",
            "mail": "jdoe@example.com",
            "memberOf": ["CN=Staff,OU=Groups,DC=example,DC=com"],
            "enabled": true
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.sam_account_name, "jdoe");
        assert_eq!(user.member_of.len(), 1);
        assert_eq!(user.label(), "Jane Doe");
        assert!(user.enabled);
    }

    #[test]
    fn test_user_member_of_defaults_empty() {
        let json = r#"{"dn": "CN=X,DC=example,DC=com", "sAMAccountName": "x", "enabled": false}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.member_of.is_empty());
        assert_eq!(user.label(), "x");
    }
}
