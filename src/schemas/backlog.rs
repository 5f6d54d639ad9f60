//! Backlog schema - A named, fixed grouping of demands

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A backlog: a named grouping of demands created in one shot.
///
/// Membership is claimed at creation (or through the gated "add demands"
/// operation); a demand never leaves a backlog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backlog {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Ids of the member demands
    #[serde(default)]
    pub demand_ids: Vec<String>,
}

impl Backlog {
    /// Create a backlog record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        demand_ids: Vec<String>,
    ) -> Self {
        Backlog {
            id: id.into(),
            name: name.into(),
            created_at,
            demand_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backlog_json_round_trip() {
        let backlog = Backlog::new(
            "b-1",
            "Sprint Candidates",
            Utc::now(),
            vec!["d-1".to_string(), "d-2".to_string()],
        );

        let json = serde_json::to_string(&backlog).unwrap();
        let parsed: Backlog = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, backlog);
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"demandIds\""));
    }

    #[test]
    fn test_backlog_demand_ids_default_empty() {
        let json = r#"{"id":"b-1","name":"Q3","createdAt":"2024-03-01T00:00:00Z"}"#;
        let parsed: Backlog = serde_json::from_str(json).unwrap();
        assert!(parsed.demand_ids.is_empty());
    }
}
