//! Membership reconciliation engine
//!
//! Maintains the working view of one identity's group memberships: the
//! sorted row table, the pending-change set (always the minimal diff against
//! the server-reported original state), and the sequential batch apply.

mod editor;
mod outcome;
mod pending;
mod row;

pub use editor::MembershipEditor;
pub use outcome::{SaveOutcome, SaveStatus};
pub use pending::{PendingAction, PendingChanges};
pub use row::{MembershipRow, MembershipType};
