//! Sprint schemas - sprints, sprint items, and their kanban sub-status
//!
//! Sprint item status is independent of the demand's main lifecycle status
//! and is numeric on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kanban column of a sprint item.
///
/// No sub-graph is declared for these: any column is reachable from any
/// other column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SprintItemStatus {
    Backlog,
    Todo,
    InProgress,
    Done,
}

/// All kanban columns in display order
pub const ALL_COLUMNS: &[SprintItemStatus] = &[
    SprintItemStatus::Backlog,
    SprintItemStatus::Todo,
    SprintItemStatus::InProgress,
    SprintItemStatus::Done,
];

impl From<SprintItemStatus> for u8 {
    fn from(status: SprintItemStatus) -> u8 {
        match status {
            SprintItemStatus::Backlog => 0,
            SprintItemStatus::Todo => 1,
            SprintItemStatus::InProgress => 2,
            SprintItemStatus::Done => 3,
        }
    }
}

impl TryFrom<u8> for SprintItemStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SprintItemStatus::Backlog),
            1 => Ok(SprintItemStatus::Todo),
            2 => Ok(SprintItemStatus::InProgress),
            3 => Ok(SprintItemStatus::Done),
            _ => Err(format!("Unknown sprint item status: {}", value)),
        }
    }
}

impl std::fmt::Display for SprintItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SprintItemStatus::Backlog => write!(f, "backlog"),
            SprintItemStatus::Todo => write!(f, "todo"),
            SprintItemStatus::InProgress => write!(f, "in-progress"),
            SprintItemStatus::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for SprintItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backlog" => Ok(SprintItemStatus::Backlog),
            "todo" => Ok(SprintItemStatus::Todo),
            "in-progress" | "inprogress" => Ok(SprintItemStatus::InProgress),
            "done" => Ok(SprintItemStatus::Done),
            _ => Err(format!("Unknown sprint item status: {}", s)),
        }
    }
}

/// Overall status of a sprint, numeric on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SprintStatus {
    NotStarted,
    InProgress,
    Paused,
    Completed,
}

impl From<SprintStatus> for u8 {
    fn from(status: SprintStatus) -> u8 {
        match status {
            SprintStatus::NotStarted => 0,
            SprintStatus::InProgress => 1,
            SprintStatus::Paused => 2,
            SprintStatus::Completed => 3,
        }
    }
}

impl TryFrom<u8> for SprintStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(SprintStatus::NotStarted),
            1 => Ok(SprintStatus::InProgress),
            2 => Ok(SprintStatus::Paused),
            3 => Ok(SprintStatus::Completed),
            _ => Err(format!("Unknown sprint status: {}", value)),
        }
    }
}

/// A demand scheduled into a sprint.
///
/// References the demand by id; the kanban status here is independent of
/// the demand's lifecycle status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintItem {
    /// Unique identifier of the sprint item
    pub id: String,

    /// The scheduled demand
    pub demand_id: String,

    /// Kanban column
    pub status: SprintItemStatus,

    /// Planned effort in hours
    #[serde(default)]
    pub planned_hours: f64,

    /// Worked effort in hours
    #[serde(default)]
    pub worked_hours: f64,
}

/// A time-boxed sprint with its scheduled items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sprint {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Sprint start
    pub start_date: DateTime<Utc>,

    /// Sprint end
    pub end_date: DateTime<Utc>,

    /// Overall sprint status
    pub status: SprintStatus,

    /// Scheduled items
    #[serde(default)]
    pub items: Vec<SprintItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_status_numeric_serialization() {
        assert_eq!(serde_json::to_string(&SprintItemStatus::Backlog).unwrap(), "0");
        assert_eq!(serde_json::to_string(&SprintItemStatus::Todo).unwrap(), "1");
        assert_eq!(serde_json::to_string(&SprintItemStatus::InProgress).unwrap(), "2");
        assert_eq!(serde_json::to_string(&SprintItemStatus::Done).unwrap(), "3");
    }

    #[test]
    fn test_item_status_numeric_deserialization() {
        assert_eq!(
            serde_json::from_str::<SprintItemStatus>("2").unwrap(),
            SprintItemStatus::InProgress
        );
        assert!(serde_json::from_str::<SprintItemStatus>("7").is_err());
    }

    #[test]
    fn test_item_status_from_str() {
        assert_eq!("todo".parse::<SprintItemStatus>().unwrap(), SprintItemStatus::Todo);
        assert_eq!(
            "in-progress".parse::<SprintItemStatus>().unwrap(),
            SprintItemStatus::InProgress
        );
        assert!("doing".parse::<SprintItemStatus>().is_err());
    }

    #[test]
    fn test_sprint_status_round_trip() {
        for status in [
            SprintStatus::NotStarted,
            SprintStatus::InProgress,
            SprintStatus::Paused,
            SprintStatus::Completed,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            let parsed: SprintStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_sprint_item_wire_shape() {
        let json = r#"{"id":"si-1","demandId":"d-1","status":1,"plannedHours":8.0,"workedHours":2.5}"#;
        let item: SprintItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.demand_id, "d-1");
        assert_eq!(item.status, SprintItemStatus::Todo);
        assert_eq!(item.planned_hours, 8.0);
        assert_eq!(item.worked_hours, 2.5);
    }

    #[test]
    fn test_sprint_item_hours_default_zero() {
        let json = r#"{"id":"si-1","demandId":"d-1","status":0}"#;
        let item: SprintItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.planned_hours, 0.0);
        assert_eq!(item.worked_hours, 0.0);
    }

    #[test]
    fn test_all_columns_order() {
        assert_eq!(ALL_COLUMNS.len(), 4);
        assert_eq!(ALL_COLUMNS[0], SprintItemStatus::Backlog);
        assert_eq!(ALL_COLUMNS[3], SprintItemStatus::Done);
    }
}
