//! Pending-change set

use serde::{Deserialize, Serialize};

/// Intended action for a group relative to the original server snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingAction {
    Add,
    Remove,
}

impl std::fmt::Display for PendingAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PendingAction::Add => write!(f, "add"),
            PendingAction::Remove => write!(f, "remove"),
        }
    }
}

/// Insertion-ordered map from group common name to pending action
///
/// Iteration yields entries in the order they were first inserted, so batch
/// apply follows operator action order. Updating an existing key keeps its
/// position; removing and re-adding moves it to the end.
#[derive(Debug, Clone, Default)]
pub struct PendingChanges {
    entries: Vec<(String, PendingAction)>,
}

impl PendingChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action for a group, preserving its position if already present
    pub fn set(&mut self, cn: &str, action: PendingAction) {
        if let Some(entry) = self.entries.iter_mut().find(|(key, _)| key == cn) {
            entry.1 = action;
        } else {
            self.entries.push((cn.to_string(), action));
        }
    }

    /// Remove the entry for a group, if present
    pub fn remove(&mut self, cn: &str) {
        self.entries.retain(|(key, _)| key != cn);
    }

    pub fn get(&self, cn: &str) -> Option<PendingAction> {
        self.entries
            .iter()
            .find(|(key, _)| key == cn)
            .map(|(_, action)| *action)
    }

    pub fn contains(&self, cn: &str) -> bool {
        self.get(cn).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, PendingAction)> {
        self.entries
            .iter()
            .map(|(cn, action)| (cn.as_str(), *action))
    }
}
