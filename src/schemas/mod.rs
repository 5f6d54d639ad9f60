//! Schema types for demandas
//!
//! All types are compatible with the backend's JSON wire shapes.

mod backlog;
mod config;
mod demand;
mod sprint;

pub use backlog::Backlog;
pub use config::Config;
pub use demand::{Demand, DemandStatus, StatusHistoryEntry};
pub use sprint::{Sprint, SprintItem, SprintItemStatus, SprintStatus, ALL_COLUMNS};
