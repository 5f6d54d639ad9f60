//! Sprint endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::schemas::{Sprint, SprintItemStatus};

use super::client::ApiClient;

/// Envelope of `GET /sprints`
#[derive(Debug, Clone, Deserialize)]
pub struct SprintList {
    #[serde(default)]
    pub data: Vec<Sprint>,
}

/// Body of `PATCH /sprints/items/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateItemStatusRequest {
    pub status: SprintItemStatus,
}

/// Response of `PATCH /sprints/items/{id}/status`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemStatusResponse {
    pub id: String,
    pub status: SprintItemStatus,
}

/// One point of a sprint burndown series
#[derive(Debug, Clone, Deserialize)]
pub struct BurndownPoint {
    pub date: String,
    pub planned: f64,
    pub remaining: f64,
}

impl ApiClient {
    /// `GET /sprints`
    pub async fn list_sprints(&self) -> Result<Vec<Sprint>> {
        let list: SprintList = self.get_json("/sprints").await?;
        Ok(list.data)
    }

    /// `GET /sprints/{id}`
    pub async fn get_sprint(&self, id: &str) -> Result<Sprint> {
        self.get_json(&format!("/sprints/{}", id)).await
    }

    /// `PATCH /sprints/items/{item_id}/status`
    pub async fn update_sprint_item_status(
        &self,
        item_id: &str,
        status: SprintItemStatus,
    ) -> Result<UpdateItemStatusResponse> {
        self.send_json(
            Method::PATCH,
            &format!("/sprints/items/{}/status", item_id),
            &UpdateItemStatusRequest { status },
        )
        .await
    }

    /// `GET /sprints/{id}/burndown`
    pub async fn get_burndown(&self, id: &str) -> Result<Vec<BurndownPoint>> {
        self.get_json(&format!("/sprints/{}/burndown", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_item_status_request_is_numeric() {
        let request = UpdateItemStatusRequest {
            status: SprintItemStatus::InProgress,
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"status":2}"#);
    }

    #[test]
    fn test_sprint_detail_deserializes() {
        let json = r#"{
            "id": "s-1",
            "name": "Sprint 12",
            "startDate": "2024-03-01T00:00:00Z",
            "endDate": "2024-03-15T00:00:00Z",
            "status": 1,
            "items": [
                {"id": "si-1", "demandId": "d-1", "status": 0, "plannedHours": 8.0, "workedHours": 0.0}
            ]
        }"#;

        let sprint: Sprint = serde_json::from_str(json).unwrap();
        assert_eq!(sprint.name, "Sprint 12");
        assert_eq!(sprint.items.len(), 1);
        assert_eq!(sprint.items[0].status, SprintItemStatus::Backlog);
    }

    #[test]
    fn test_burndown_point_deserializes() {
        let json = r#"{"date": "2024-03-02", "planned": 40.0, "remaining": 32.0}"#;
        let point: BurndownPoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.planned, 40.0);
        assert_eq!(point.remaining, 32.0);
    }
}
