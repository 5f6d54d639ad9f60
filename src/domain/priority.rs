//! Priority gating for backlog membership
//!
//! A demand needs a priority before it can join a backlog, and it can join
//! at most one. Priority edits follow a confirmation policy: setting a
//! priority for the first time applies immediately, replacing or clearing
//! an existing one requires explicit confirmation.

use crate::errors::{DemandasError, Result};
use crate::schemas::Demand;

/// Lowest (numerically highest) accepted priority
pub const MAX_PRIORITY: u8 = 5;

/// Whether a demand is eligible to join a backlog
pub fn can_join_backlog(demand: &Demand) -> bool {
    demand.priority.is_some() && demand.backlog_id.is_none()
}

/// Reject priorities outside 1..=5. `None` (clearing) is always in range.
pub fn validate_priority(priority: Option<u8>) -> Result<()> {
    match priority {
        Some(p) if p == 0 || p > MAX_PRIORITY => Err(DemandasError::InvalidPriority(p)),
        _ => Ok(()),
    }
}

/// How a requested priority edit should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityChange {
    /// Same value as before; nothing to do
    Unchanged,
    /// First assignment; applies without confirmation
    Immediate,
    /// Replacing or clearing a set value; needs explicit confirmation
    RequiresConfirmation,
}

/// Classify a priority edit against the current value
pub fn classify_priority_change(current: Option<u8>, requested: Option<u8>) -> PriorityChange {
    match (current, requested) {
        _ if current == requested => PriorityChange::Unchanged,
        (None, Some(_)) => PriorityChange::Immediate,
        (None, None) => PriorityChange::Unchanged,
        (Some(_), _) => PriorityChange::RequiresConfirmation,
    }
}
