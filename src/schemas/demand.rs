//! Demand schema - The main tracked ticket type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a demand.
///
/// Serialized with the exact wire names the backend uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemandStatus {
    /// Newly opened
    Aberta,
    /// Archived (lateral hold, not progress)
    Arquivado,
    /// Ranked for prioritization
    Ranqueado,
    /// Awaiting approval
    Aprovacao,
    /// Documentation in progress
    Documentacao,
    /// Execution in progress
    Execucao,
    /// Paused (lateral hold, not progress)
    Pausado,
    /// Under validation
    Validacao,
    /// Completed (terminal)
    Concluida,
}

impl std::fmt::Display for DemandStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemandStatus::Aberta => write!(f, "Aberta"),
            DemandStatus::Arquivado => write!(f, "Arquivado"),
            DemandStatus::Ranqueado => write!(f, "Ranqueado"),
            DemandStatus::Aprovacao => write!(f, "Aprovacao"),
            DemandStatus::Documentacao => write!(f, "Documentacao"),
            DemandStatus::Execucao => write!(f, "Execucao"),
            DemandStatus::Pausado => write!(f, "Pausado"),
            DemandStatus::Validacao => write!(f, "Validacao"),
            DemandStatus::Concluida => write!(f, "Concluida"),
        }
    }
}

impl std::str::FromStr for DemandStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aberta" => Ok(DemandStatus::Aberta),
            "arquivado" => Ok(DemandStatus::Arquivado),
            "ranqueado" => Ok(DemandStatus::Ranqueado),
            "aprovacao" => Ok(DemandStatus::Aprovacao),
            "documentacao" => Ok(DemandStatus::Documentacao),
            "execucao" => Ok(DemandStatus::Execucao),
            "pausado" => Ok(DemandStatus::Pausado),
            "validacao" => Ok(DemandStatus::Validacao),
            "concluida" => Ok(DemandStatus::Concluida),
            _ => Err(format!("Unknown demand status: {}", s)),
        }
    }
}

/// One entry of a demand's status history.
///
/// Immutable once written; only the workflow engine creates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusHistoryEntry {
    /// The status the demand entered
    pub status: DemandStatus,

    /// When the transition happened
    pub date: DateTime<Utc>,

    /// Who performed the transition
    pub author: String,

    /// Mandatory note explaining the transition
    pub note: String,

    /// Who is responsible for the next action (if assigned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsible_user: Option<String>,
}

impl StatusHistoryEntry {
    /// Create a new history entry dated now
    pub fn new(
        status: DemandStatus,
        author: impl Into<String>,
        note: impl Into<String>,
        responsible_user: Option<String>,
    ) -> Self {
        StatusHistoryEntry {
            status,
            date: Utc::now(),
            author: author.into(),
            note: note.into(),
            responsible_user,
        }
    }

    /// Return this entry with an explicit date (test fixtures, replays)
    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

/// A tracked demand (ticket)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demand {
    /// Unique identifier
    pub id: String,

    /// Human-readable protocol number
    pub protocol: String,

    /// Current lifecycle status
    pub status: DemandStatus,

    /// Priority 1 (highest) to 5, unset until triaged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,

    /// Backlog this demand belongs to, at most one, write-once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backlog_id: Option<String>,

    /// Estimated delivery date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<DateTime<Utc>>,

    /// Who is responsible for the next action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action_responsible: Option<String>,

    /// Link to the supporting document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

impl Demand {
    /// Create a new demand in the initial status
    pub fn new(id: impl Into<String>, protocol: impl Into<String>) -> Self {
        Demand {
            id: id.into(),
            protocol: protocol.into(),
            status: DemandStatus::Aberta,
            priority: None,
            backlog_id: None,
            estimated_delivery: None,
            next_action_responsible: None,
            document_url: None,
        }
    }

    /// Return a new Demand with the given status
    pub fn with_status(mut self, status: DemandStatus) -> Self {
        self.status = status;
        self
    }

    /// Return a new Demand with the given priority
    pub fn with_priority(mut self, priority: Option<u8>) -> Self {
        self.priority = priority;
        self
    }

    /// Return a new Demand claimed by the given backlog
    pub fn with_backlog(mut self, backlog_id: impl Into<String>) -> Self {
        self.backlog_id = Some(backlog_id.into());
        self
    }

    /// Return a new Demand with the given estimated delivery date
    pub fn with_estimated_delivery(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.estimated_delivery = date;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&DemandStatus::Aberta).unwrap(), "\"Aberta\"");
        assert_eq!(serde_json::to_string(&DemandStatus::Aprovacao).unwrap(), "\"Aprovacao\"");
        assert_eq!(serde_json::to_string(&DemandStatus::Concluida).unwrap(), "\"Concluida\"");
    }

    #[test]
    fn test_status_deserialization() {
        assert_eq!(
            serde_json::from_str::<DemandStatus>("\"Execucao\"").unwrap(),
            DemandStatus::Execucao
        );
        assert_eq!(
            serde_json::from_str::<DemandStatus>("\"Pausado\"").unwrap(),
            DemandStatus::Pausado
        );
        assert!(serde_json::from_str::<DemandStatus>("\"Fechada\"").is_err());
    }

    #[test]
    fn test_status_from_str_case_insensitive() {
        assert_eq!("aberta".parse::<DemandStatus>().unwrap(), DemandStatus::Aberta);
        assert_eq!("Validacao".parse::<DemandStatus>().unwrap(), DemandStatus::Validacao);
        assert!("unknown".parse::<DemandStatus>().is_err());
    }

    #[test]
    fn test_demand_json_round_trip() {
        let demand = Demand::new("d-1", "2024-0042").with_priority(Some(2));

        let json = serde_json::to_string_pretty(&demand).unwrap();
        let parsed: Demand = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, demand.id);
        assert_eq!(parsed.protocol, "2024-0042");
        assert_eq!(parsed.status, DemandStatus::Aberta);
        assert_eq!(parsed.priority, Some(2));
    }

    #[test]
    fn test_demand_skips_none_in_serialization() {
        let demand = Demand::new("d-1", "2024-0042");
        let json = serde_json::to_string(&demand).unwrap();

        assert!(!json.contains("\"priority\":"));
        assert!(!json.contains("\"backlogId\":"));
        assert!(!json.contains("\"estimatedDelivery\":"));
    }

    #[test]
    fn test_demand_uses_camel_case_keys() {
        let demand = Demand::new("d-1", "2024-0042").with_backlog("b-1");
        let json = serde_json::to_string(&demand).unwrap();

        assert!(json.contains("\"backlogId\":\"b-1\""));
    }

    #[test]
    fn test_with_status_does_not_mutate_original() {
        let demand = Demand::new("d-1", "2024-0042");
        let updated = demand.clone().with_status(DemandStatus::Ranqueado);

        assert_eq!(demand.status, DemandStatus::Aberta);
        assert_eq!(updated.status, DemandStatus::Ranqueado);
    }

    #[test]
    fn test_history_entry_at_overrides_date() {
        let date = "2024-03-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let entry = StatusHistoryEntry::new(DemandStatus::Ranqueado, "ana", "triaged", None).at(date);
        assert_eq!(entry.date, date);
    }

    #[test]
    fn test_history_entry_camel_case_wire_shape() {
        let entry = StatusHistoryEntry::new(
            DemandStatus::Execucao,
            "ana",
            "starting work",
            Some("bruno".to_string()),
        );
        let json = serde_json::to_string(&entry).unwrap();

        assert!(json.contains("\"responsibleUser\":\"bruno\""));
        assert!(json.contains("\"status\":\"Execucao\""));
    }
}
