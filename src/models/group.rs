//! Group model

use crate::dn;
use serde::{Deserialize, Serialize};

/// A directory group
///
/// Groups come from two places: the bulk catalog fetch, or synthesized on
/// the fly from a membership DN when no catalog entry matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Distinguished name (unique key)
    pub dn: String,

    /// Common name
    pub cn: String,

    #[serde(rename = "sAMAccountName", default)]
    pub sam_account_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "groupType", default)]
    pub group_type: Option<String>,

    /// Some servers report the DN under this attribute as well
    #[serde(rename = "distinguishedName", default)]
    pub distinguished_name: Option<String>,
}

impl Group {
    /// Synthesize a fallback group from a membership DN with no catalog match
    ///
    /// The common name is parsed from the DN's leading `CN=` component; the
    /// description is left empty.
    pub fn fallback_from_dn(member_dn: &str) -> Self {
        let cn = dn::cn_or_dn(member_dn);
        Self {
            dn: member_dn.to_string(),
            sam_account_name: cn.clone(),
            cn,
            description: None,
            group_type: None,
            distinguished_name: None,
        }
    }

    /// Check whether this catalog entry matches a membership DN
    pub fn matches_member_dn(&self, member_dn: &str, member_cn: &str) -> bool {
        self.cn == member_cn
            || self.dn == member_dn
            || self.distinguished_name.as_deref() == Some(member_dn)
    }
}
