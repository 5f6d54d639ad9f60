//! Status change application
//!
//! The workflow engine is the only writer of a demand's history log. It
//! validates a requested transition against the graph and, on success,
//! appends the history entry and returns the updated demand.

use crate::errors::{DemandasError, Result};
use crate::schemas::{Demand, DemandStatus, StatusHistoryEntry};

use super::graph::TransitionGraph;
use super::history::HistoryLog;

/// Outcome of a successful status change
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// The demand with its new status; the input demand is never mutated
    pub demand: Demand,

    /// The history entry that was appended to the log
    pub entry: StatusHistoryEntry,
}

/// Validates and applies demand status changes
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkflowEngine {
    graph: TransitionGraph,
}

impl WorkflowEngine {
    pub fn new(graph: TransitionGraph) -> Self {
        WorkflowEngine { graph }
    }

    /// The transition graph this engine validates against
    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// Apply a status change to a demand.
    ///
    /// Checks, in order: the note is non-empty, the demand is not terminal,
    /// and the move is a legal graph edge. The terminal check runs before
    /// the edge check so a closed demand reports `DemandClosed` instead of
    /// a generic `InvalidTransition` (its allowed-next set is empty).
    ///
    /// On success the new history entry is appended to `log` and the
    /// updated demand is returned; on failure neither changes.
    pub fn change_status(
        &self,
        demand: &Demand,
        log: &mut HistoryLog,
        new_status: DemandStatus,
        note: &str,
        author: &str,
        responsible_user: Option<String>,
    ) -> Result<StatusChange> {
        if note.trim().is_empty() {
            return Err(DemandasError::MissingNote);
        }

        if self.graph.is_terminal(demand.status) {
            return Err(DemandasError::DemandClosed(demand.protocol.clone()));
        }

        if !self.graph.is_allowed(demand.status, new_status) {
            return Err(DemandasError::InvalidTransition {
                from: demand.status,
                to: new_status,
            });
        }

        let entry = StatusHistoryEntry::new(new_status, author, note, responsible_user);
        log.append(entry.clone());

        Ok(StatusChange {
            demand: demand.clone().with_status(new_status),
            entry,
        })
    }
}
