//! Distinguished-name parsing helpers
//!
//! Membership DNs are compared component-wise: the leading `CN=` value of a
//! DN is extracted and matched case-insensitively against a group's common
//! name. A substring scan of the raw DN would mistake "Admins" for a member
//! of "SubAdmins"; exact first-RDN comparison avoids that.

/// Split a DN into its RDN components, honoring `\,` escapes
pub fn split_rdns(dn: &str) -> Vec<String> {
    let mut components = Vec::new();
    let mut current = String::new();
    let mut escaped = false;

    for c in dn.chars() {
        if escaped {
            current.push(c);
            escaped = false;
        } else if c == '\\' {
            current.push(c);
            escaped = true;
        } else if c == ',' {
            components.push(current.trim().to_string());
            current = String::new();
        } else {
            current.push(c);
        }
    }
    if !current.trim().is_empty() {
        components.push(current.trim().to_string());
    }
    components
}

/// Extract the value of the leading `CN=` component, if the DN starts with one
pub fn leading_cn(dn: &str) -> Option<String> {
    let first = split_rdns(dn).into_iter().next()?;
    let (attr, value) = first.split_once('=')?;
    if attr.trim().eq_ignore_ascii_case("cn") {
        Some(value.trim().to_string())
    } else {
        None
    }
}

/// Extract the leading CN, falling back to the whole DN when absent
pub fn cn_or_dn(dn: &str) -> String {
    leading_cn(dn).unwrap_or_else(|| dn.to_string())
}

/// Check whether any DN in `member_of` names the group `cn`
///
/// Comparison is case-insensitive and exact on the first RDN value.
pub fn member_of_has_cn(member_of: &[String], cn: &str) -> bool {
    member_of
        .iter()
        .any(|dn| matches!(leading_cn(dn), Some(ref value) if value.eq_ignore_ascii_case(cn)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_cn_simple() {
        assert_eq!(
            leading_cn("CN=Domain Admins,OU=Groups,DC=example,DC=com"),
            Some("Domain Admins".to_string())
        );
    }

    #[test]
    fn test_leading_cn_case_insensitive_attribute() {
        assert_eq!(
            leading_cn("cn=Developers,DC=example,DC=com"),
            Some("Developers".to_string())
        );
    }

    #[test]
    fn test_leading_cn_absent() {
        assert_eq!(leading_cn("OU=Groups,DC=example,DC=com"), None);
        assert_eq!(leading_cn("not a dn"), None);
    }

    #[test]
    fn test_cn_or_dn_fallback() {
        assert_eq!(cn_or_dn("OU=Groups,DC=example,DC=com"), "OU=Groups,DC=example,DC=com");
        assert_eq!(cn_or_dn("CN=Staff,DC=example,DC=com"), "Staff");
    }

    #[test]
    fn test_split_rdns_escaped_comma() {
        let components = split_rdns("CN=Smith\\, John,OU=Users,DC=example,DC=com");
        assert_eq!(components[0], "CN=Smith\\, John");
        assert_eq!(components[1], "OU=Users");
    }

    #[test]
    fn test_member_of_has_cn_exact_match_only() {
        let member_of = vec!["CN=SubAdmins,OU=Groups,DC=example,DC=com".to_string()];

        // Exact component comparison must not confuse "Admins" with "SubAdmins"
        assert!(!member_of_has_cn(&member_of, "Admins"));
        assert!(member_of_has_cn(&member_of, "SubAdmins"));
    }

    #[test]
    fn test_member_of_has_cn_case_insensitive() {
        let member_of = vec!["CN=Domain Admins,DC=example,DC=com".to_string()];
        assert!(member_of_has_cn(&member_of, "domain admins"));
    }

    #[test]
    fn test_member_of_has_cn_empty() {
        assert!(!member_of_has_cn(&[], "Admins"));
    }
}
