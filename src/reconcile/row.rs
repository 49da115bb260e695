//! Membership row display/working entity

use crate::models::Group;
use serde::{Deserialize, Serialize};

/// How the identity belongs to the group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipType {
    /// Reported directly by the server on the identity
    Direct,
    /// Inherited through another group (reserved; the server reports direct)
    Nested,
}

impl std::fmt::Display for MembershipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipType::Direct => write!(f, "direct"),
            MembershipType::Nested => write!(f, "nested"),
        }
    }
}

/// One row of the working membership table
///
/// Rows are keyed by group common name for mutations and by distinguished
/// name for identity/display purposes.
#[derive(Debug, Clone)]
pub struct MembershipRow {
    pub group: Group,
    pub is_member: bool,
    pub membership_type: MembershipType,
}

impl MembershipRow {
    /// Row for a group the identity currently belongs to
    pub fn member(group: Group) -> Self {
        Self {
            group,
            is_member: true,
            membership_type: MembershipType::Direct,
        }
    }
}
