//! Backlog creation and membership claims
//!
//! Backlogs claim demands exclusively: a demand joins at most one backlog,
//! and the claim is write-once. Every demand in a selection must pass the
//! priority gate before the backlog is created.

use chrono::{DateTime, Utc};

use crate::errors::{DemandasError, Result};
use crate::schemas::{Backlog, Demand};

use super::priority::can_join_backlog;

/// Result of a successful backlog creation
#[derive(Debug, Clone, PartialEq)]
pub struct BacklogCreation {
    /// The new backlog record
    pub backlog: Backlog,

    /// The demands with their backlog claim applied
    pub demands: Vec<Demand>,
}

/// Validate a selection of demands for backlog membership.
///
/// Fails with `EmptySelection` for an empty selection, `MissingPriority`
/// naming every demand without a priority (not just the first), or
/// `AlreadyInBacklog` naming every demand already claimed elsewhere.
pub fn validate_selection(name: &str, demands: &[Demand]) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DemandasError::SchemaValidation(
            "backlog name is required".to_string(),
        ));
    }

    if demands.is_empty() {
        return Err(DemandasError::EmptySelection);
    }

    let missing_priority: Vec<String> = demands
        .iter()
        .filter(|d| d.priority.is_none())
        .map(|d| d.id.clone())
        .collect();
    if !missing_priority.is_empty() {
        return Err(DemandasError::MissingPriority {
            offending_ids: missing_priority,
        });
    }

    let already_claimed: Vec<String> = demands
        .iter()
        .filter(|d| d.backlog_id.is_some())
        .map(|d| d.id.clone())
        .collect();
    if !already_claimed.is_empty() {
        return Err(DemandasError::AlreadyInBacklog {
            offending_ids: already_claimed,
        });
    }

    debug_assert!(demands.iter().all(can_join_backlog));
    Ok(())
}

/// Create a backlog and claim every demand in the selection.
///
/// Validation and claim happen together: either the whole selection passes
/// and every demand gets its `backlog_id` set, or nothing is created.
pub fn create(
    id: impl Into<String>,
    name: &str,
    demands: Vec<Demand>,
    created_at: DateTime<Utc>,
) -> Result<BacklogCreation> {
    validate_selection(name, &demands)?;

    let id = id.into();
    let demand_ids: Vec<String> = demands.iter().map(|d| d.id.clone()).collect();
    let claimed: Vec<Demand> = demands
        .into_iter()
        .map(|d| d.with_backlog(id.clone()))
        .collect();

    Ok(BacklogCreation {
        backlog: Backlog::new(id, name, created_at, demand_ids),
        demands: claimed,
    })
}
