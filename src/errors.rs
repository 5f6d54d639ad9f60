//! Error types for the demandas CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

use crate::schemas::DemandStatus;

/// Result type alias for demandas operations
pub type Result<T> = std::result::Result<T, DemandasError>;

/// Main error type for all demandas operations
#[derive(Debug, Error)]
pub enum DemandasError {
    /// Attempted status transition is not an edge of the workflow graph
    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: DemandStatus, to: DemandStatus },

    /// A status change was attempted without the mandatory note
    #[error("A note is required to register a status change")]
    MissingNote,

    /// A status change was attempted on a demand in a terminal status
    #[error("Demand {0} is closed and cannot change status")]
    DemandClosed(String),

    /// Backlog operation includes demands without a priority set
    #[error("Demands without priority: {}", offending_ids.join(", "))]
    MissingPriority { offending_ids: Vec<String> },

    /// Backlog operation with an empty demand selection
    #[error("No demands selected")]
    EmptySelection,

    /// Backlog operation includes demands already claimed by a backlog
    #[error("Demands already in a backlog: {}", offending_ids.join(", "))]
    AlreadyInBacklog { offending_ids: Vec<String> },

    /// Sprint board item not found
    #[error("Sprint item not found: {0}")]
    ItemNotFound(String),

    /// Priority value outside the accepted 1-5 range
    #[error("Invalid priority: {0} (expected 1-5)")]
    InvalidPriority(u8),

    /// Changing an already-set priority requires explicit confirmation
    #[error("Confirmation required: {0}")]
    ConfirmationRequired(String),

    /// The status change was applied but a follow-up update failed
    #[error("Status change applied, but a follow-up update failed: {0}")]
    PartialUpdate(String),

    /// Transport or HTTP-level failure on a backend call
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Schema validation failed
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemandasError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            DemandasError::InvalidTransition { .. } => "INVALID_TRANSITION",
            DemandasError::MissingNote => "MISSING_NOTE",
            DemandasError::DemandClosed(_) => "DEMAND_CLOSED",
            DemandasError::MissingPriority { .. } => "MISSING_PRIORITY",
            DemandasError::EmptySelection => "EMPTY_SELECTION",
            DemandasError::AlreadyInBacklog { .. } => "ALREADY_IN_BACKLOG",
            DemandasError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            DemandasError::InvalidPriority(_) => "INVALID_PRIORITY",
            DemandasError::ConfirmationRequired(_) => "CONFIRMATION_REQUIRED",
            DemandasError::PartialUpdate(_) => "PARTIAL_UPDATE",
            DemandasError::Network(_) => "NETWORK_ERROR",
            DemandasError::ConfigError(_) => "CONFIG_ERROR",
            DemandasError::InvalidJson(_) => "INVALID_JSON",
            DemandasError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            DemandasError::FileNotFound(_) => "FILE_NOT_FOUND",
            DemandasError::Io(_) => "IO_ERROR",
        }
    }
}

impl From<reqwest::Error> for DemandasError {
    fn from(error: reqwest::Error) -> Self {
        DemandasError::Network(error.to_string())
    }
}

/// Convert an error to an appropriate exit code.
///
/// `ConfirmationRequired` and `PartialUpdate` get dedicated codes so scripts
/// can distinguish "retry with --yes" and "status applied, follow-up not
/// saved" from plain failures.
pub fn to_exit_code(error: &DemandasError) -> i32 {
    match error {
        DemandasError::ConfirmationRequired(_) => 3,
        DemandasError::PartialUpdate(_) => 4,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let invalid = DemandasError::InvalidTransition {
            from: DemandStatus::Aberta,
            to: DemandStatus::Concluida,
        };
        assert_eq!(invalid.code(), "INVALID_TRANSITION");
        assert_eq!(DemandasError::MissingNote.code(), "MISSING_NOTE");
        assert_eq!(DemandasError::DemandClosed("DMD-1".into()).code(), "DEMAND_CLOSED");
        assert_eq!(DemandasError::EmptySelection.code(), "EMPTY_SELECTION");
        assert_eq!(DemandasError::ItemNotFound("x".into()).code(), "ITEM_NOT_FOUND");
        assert_eq!(DemandasError::InvalidPriority(9).code(), "INVALID_PRIORITY");
        assert_eq!(DemandasError::Network("down".into()).code(), "NETWORK_ERROR");
    }

    #[test]
    fn test_missing_priority_lists_all_offenders() {
        let err = DemandasError::MissingPriority {
            offending_ids: vec!["d-2".into(), "d-5".into()],
        };
        let message = err.to_string();
        assert!(message.contains("d-2"));
        assert!(message.contains("d-5"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&DemandasError::ConfirmationRequired("p".into())), 3);
        assert_eq!(to_exit_code(&DemandasError::PartialUpdate("date".into())), 4);
        assert_eq!(to_exit_code(&DemandasError::MissingNote), 1);
        assert_eq!(to_exit_code(&DemandasError::Network("down".into())), 1);
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = DemandasError::InvalidTransition {
            from: DemandStatus::Aberta,
            to: DemandStatus::Concluida,
        };
        assert!(err.to_string().contains("Aberta"));
        assert!(err.to_string().contains("Concluida"));
    }
}
