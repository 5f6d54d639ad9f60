//! Domain logic for the demand lifecycle and scheduling
//!
//! Pure, side-effect-free components: the transition graph, the workflow
//! engine and its history log, the rework analyzer, priority gating,
//! backlog assignment, and the sprint board.

mod backlog;
mod board;
mod graph;
mod history;
mod priority;
mod regression;
mod workflow;


pub use backlog::{create as create_backlog, validate_selection, BacklogCreation};
pub use board::{MoveOutcome, SprintBoard};
pub use graph::{TransitionGraph, ALL_STATUSES};
pub use history::HistoryLog;
pub use priority::{
    can_join_backlog, classify_priority_change, validate_priority, PriorityChange, MAX_PRIORITY,
};
pub use regression::{is_lateral, progression_rank, RegressionAnalyzer, Severity};
pub use workflow::{StatusChange, WorkflowEngine};
