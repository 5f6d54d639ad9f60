//! Demandas - CLI client for the demand tracking service
//!
//! This library provides the core functionality for the demandas CLI,
//! including:
//! - Schema definitions for demands, backlogs, sprints, and configs
//! - Domain logic for the status workflow, rework detection, priority
//!   gating, backlog assignment, and the sprint kanban board
//! - An HTTP client for the backend API
//! - File system utilities for reading/writing JSON config

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fs;
pub mod schemas;

// Re-export commonly used types
pub use errors::{DemandasError, Result};
pub use schemas::{Backlog, Config, Demand, DemandStatus, Sprint, SprintItem, StatusHistoryEntry};
