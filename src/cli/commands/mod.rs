//! Command implementations

pub mod backlog;
pub mod init;
pub mod list;
pub mod priority;
pub mod regressions;
pub mod set_status;
pub mod show;
pub mod sprint;
