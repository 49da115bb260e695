//! Batch apply outcome

use crate::output::Notice;

/// Classification of a completed save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    /// Pending set was empty; no network calls were made
    NoChanges,
    AllSucceeded,
    /// Some calls succeeded, some failed
    PartialFailure,
    AllFailed,
}

/// Result of applying the pending-change set
///
/// Failures carry per-group attribution as `"<group>: <error>"` strings and
/// never abort the remaining batch.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub total: usize,
    pub success_count: usize,
    pub errors: Vec<String>,
}

impl SaveOutcome {
    /// Outcome for an empty pending set
    pub fn no_changes() -> Self {
        Self {
            total: 0,
            success_count: 0,
            errors: Vec::new(),
        }
    }

    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            success_count: 0,
            errors: Vec::new(),
        }
    }

    pub(crate) fn add_success(&mut self) {
        self.success_count += 1;
    }

    pub(crate) fn add_failure(&mut self, group_name: &str, error: &str) {
        self.errors.push(format!("{group_name}: {error}"));
    }

    pub fn status(&self) -> SaveStatus {
        if self.total == 0 {
            SaveStatus::NoChanges
        } else if self.errors.is_empty() {
            SaveStatus::AllSucceeded
        } else if self.success_count > 0 {
            SaveStatus::PartialFailure
        } else {
            SaveStatus::AllFailed
        }
    }

    /// Notice severity for reporting this outcome
    pub fn notice(&self) -> Notice {
        match self.status() {
            SaveStatus::NoChanges => Notice::Info,
            SaveStatus::AllSucceeded => Notice::Success,
            SaveStatus::PartialFailure => Notice::Warning,
            SaveStatus::AllFailed => Notice::Error,
        }
    }

    /// Human-readable summary of the outcome
    pub fn summary(&self) -> String {
        match self.status() {
            SaveStatus::NoChanges => "No changes to save".to_string(),
            SaveStatus::AllSucceeded => format!(
                "Successfully updated {} group membership(s)",
                self.success_count
            ),
            SaveStatus::PartialFailure => format!(
                "Updated {} membership(s). Errors: {}",
                self.success_count,
                self.errors.join("; ")
            ),
            SaveStatus::AllFailed => {
                format!("Failed to update memberships: {}", self.errors.join("; "))
            }
        }
    }
}
