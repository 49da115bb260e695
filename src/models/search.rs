//! Raw directory search entries

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw entry returned by the identity search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    pub dn: String,

    /// Attribute name to values, as the directory returns them
    #[serde(default)]
    pub attributes: HashMap<String, Vec<String>>,
}

impl SearchEntry {
    /// First value of an attribute, if present
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.attributes
            .get(attribute)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Account name to navigate to for this entry
    ///
    /// Prefers sAMAccountName, then cn, then the DN itself.
    pub fn account_name(&self) -> &str {
        self.first("sAMAccountName")
            .or_else(|| self.first("cn"))
            .unwrap_or(&self.dn)
    }
}
