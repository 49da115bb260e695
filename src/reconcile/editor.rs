//! Membership editor: working rows, pending diff, batch apply

use crate::api::ApiClient;
use crate::dn;
use crate::logging;
use crate::models::{Group, User};
use crate::reconcile::{
    MembershipRow, PendingAction, PendingChanges, SaveOutcome,
};

/// Working state for editing one identity's group memberships
///
/// Owns the row table and the pending-change set, both keyed against the
/// immutable `member_of` snapshot taken when the identity was loaded. One
/// editor instance belongs to one identity view; it is discarded and rebuilt
/// after a successful save or when the viewed identity changes.
pub struct MembershipEditor {
    account_name: String,
    original_member_of: Vec<String>,
    rows: Vec<MembershipRow>,
    pending: PendingChanges,
}

impl MembershipEditor {
    /// Build the editor from an identity snapshot and the group catalog
    ///
    /// Each `member_of` DN resolves to a catalog group by common name or DN;
    /// unmatched DNs get a fallback group synthesized from the DN itself.
    pub fn new(user: &User, catalog: &[Group]) -> Self {
        let mut editor = Self {
            account_name: user.sam_account_name.clone(),
            original_member_of: user.member_of.clone(),
            rows: Vec::new(),
            pending: PendingChanges::new(),
        };
        editor.rows = editor.build_rows(catalog);
        editor
    }

    fn build_rows(&self, catalog: &[Group]) -> Vec<MembershipRow> {
        let mut rows: Vec<MembershipRow> = self
            .original_member_of
            .iter()
            .map(|member_dn| {
                let member_cn = dn::cn_or_dn(member_dn);
                let group = catalog
                    .iter()
                    .find(|g| g.matches_member_dn(member_dn, &member_cn))
                    .cloned()
                    .unwrap_or_else(|| Group::fallback_from_dn(member_dn));
                MembershipRow::member(group)
            })
            .collect();
        sort_rows(&mut rows);
        rows
    }

    /// Re-resolve rows after a catalog change
    ///
    /// A late-arriving catalog can enrich groups that were synthesized from
    /// bare DNs. Operator edits survive: rows the pending set added are
    /// re-inserted and pending removals keep their unchecked state.
    pub fn refresh_catalog(&mut self, catalog: &[Group]) {
        let previous: Vec<MembershipRow> = std::mem::take(&mut self.rows);
        self.rows = self.build_rows(catalog);

        for (cn, action) in self.pending.clone().iter() {
            match action {
                PendingAction::Add => {
                    if !self.rows.iter().any(|r| r.group.cn == cn) {
                        let group = catalog
                            .iter()
                            .find(|g| g.cn == cn)
                            .cloned()
                            .or_else(|| {
                                previous
                                    .iter()
                                    .find(|r| r.group.cn == cn)
                                    .map(|r| r.group.clone())
                            });
                        if let Some(group) = group {
                            self.rows.push(MembershipRow::member(group));
                        }
                    }
                }
                PendingAction::Remove => {
                    if let Some(row) = self.rows.iter_mut().find(|r| r.group.cn == cn) {
                        row.is_member = false;
                    }
                }
            }
        }
        sort_rows(&mut self.rows);
    }

    /// The working row table, sorted by common name
    pub fn rows(&self) -> &[MembershipRow] {
        &self.rows
    }

    /// The current minimal diff against the original snapshot
    pub fn pending(&self) -> &PendingChanges {
        &self.pending
    }

    /// Account name the batch apply will mutate
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Whether the original snapshot reports membership in `cn`
    pub fn was_originally_member(&self, cn: &str) -> bool {
        dn::member_of_has_cn(&self.original_member_of, cn)
    }

    /// Filter search results down to groups not already present as rows
    pub fn candidates(&self, results: Vec<Group>) -> Vec<Group> {
        results
            .into_iter()
            .filter(|g| !self.rows.iter().any(|r| r.group.dn == g.dn))
            .collect()
    }

    /// Insert a group from search as a new member row
    ///
    /// A freshly added group is by definition a deviation from the original
    /// snapshot, so its pending entry is recorded unconditionally. Returns
    /// false if a row for the group's DN already exists.
    pub fn add_group(&mut self, group: Group) -> bool {
        if self.rows.iter().any(|r| r.group.dn == group.dn) {
            return false;
        }

        let cn = group.cn.clone();
        self.rows.push(MembershipRow::member(group));
        sort_rows(&mut self.rows);
        self.pending.set(&cn, PendingAction::Add);
        true
    }

    /// Flip membership for the row with the given common name
    ///
    /// The pending entry is recomputed from the new status against original
    /// membership, so the set stays the minimal true diff: toggling a row
    /// back to its original state deletes the entry rather than leaving it
    /// stale. Returns false if no row matches.
    pub fn toggle(&mut self, cn: &str) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.group.cn == cn) else {
            return false;
        };
        row.is_member = !row.is_member;
        let is_member = row.is_member;

        if self.was_originally_member(cn) {
            if !is_member {
                self.pending.set(cn, PendingAction::Remove);
            } else {
                self.pending.remove(cn);
            }
        } else if is_member {
            self.pending.set(cn, PendingAction::Add);
        } else {
            self.pending.remove(cn);
        }
        true
    }

    /// Apply the pending-change set against the directory service
    ///
    /// Calls are issued one at a time in insertion order; call N+1 is not
    /// dispatched until call N's envelope is back, so server-side effects
    /// apply deterministically relative to operator action order. A failing
    /// entry never blocks the rest of the batch. The pending set is cleared
    /// unconditionally afterwards; retry is operator-driven, and the caller
    /// re-fetches identity and catalog so displayed state is server truth.
    pub async fn save(&mut self, api: &ApiClient) -> SaveOutcome {
        if self.pending.is_empty() {
            return SaveOutcome::no_changes();
        }

        let mut outcome = SaveOutcome::new(self.pending.len());
        let entries: Vec<(String, PendingAction)> = self
            .pending
            .iter()
            .map(|(cn, action)| (cn.to_string(), action))
            .collect();

        for (group_name, action) in entries {
            logging::verbose(&format!("{action} {group_name}"));
            let response = match action {
                PendingAction::Add => api.add_member(&self.account_name, &group_name).await,
                PendingAction::Remove => api.remove_member(&self.account_name, &group_name).await,
            };

            if response.success {
                outcome.add_success();
            } else {
                outcome.add_failure(&group_name, &response.error_message());
            }
        }

        self.pending.clear();
        outcome
    }
}

fn sort_rows(rows: &mut [MembershipRow]) {
    rows.sort_by(|a, b| {
        a.group
            .cn
            .to_lowercase()
            .cmp(&b.group.cn.to_lowercase())
            .then_with(|| a.group.cn.cmp(&b.group.cn))
    });
}
