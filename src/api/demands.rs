//! Demand endpoints
//!
//! Wire shapes follow the backend's camelCase JSON. The status-change and
//! demand-update calls are separate backend operations; see the set-status
//! command for how their two-step composition is surfaced.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::domain::HistoryLog;
use crate::errors::Result;
use crate::schemas::{Demand, DemandStatus, StatusHistoryEntry};

use super::client::ApiClient;

/// One page of the demand list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandPage {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub items: Vec<Demand>,
}

/// Optional filters for the demand list
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DemandStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl DemandFilters {
    fn to_query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(status) = self.status {
            parts.push(format!("status={}", status));
        }
        if let Some(q) = &self.q {
            parts.push(format!("q={}", q));
        }
        if let Some(page) = self.page {
            parts.push(format!("page={}", page));
        }
        if let Some(size) = self.size {
            parts.push(format!("size={}", size));
        }
        if parts.is_empty() {
            String::new()
        } else {
            format!("?{}", parts.join("&"))
        }
    }
}

/// Full demand detail including its status history
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemandDetail {
    #[serde(flatten)]
    pub demand: Demand,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub observation: Option<String>,
    #[serde(default)]
    pub history: Vec<StatusHistoryEntry>,
}

impl DemandDetail {
    /// The demand's history as an append-only log
    pub fn history_log(&self) -> HistoryLog {
        HistoryLog::from_entries(self.history.clone())
    }
}

/// Body of `POST /demands/{id}/status`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusRequest {
    pub new_status: DemandStatus,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_user: Option<String>,
}

/// Response of `POST /demands/{id}/status`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusResponse {
    pub id: String,
    pub status: DemandStatus,
}

/// Body of `PUT /demands/{id}`
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDemandRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_action_responsible: Option<String>,
}

/// Body of `PATCH /demands/{id}/priority`. `null` clears the priority, so
/// the field always serializes.
#[derive(Debug, Clone, Serialize)]
pub struct UpdatePriorityRequest {
    pub priority: Option<u8>,
}

/// Response of `PATCH /demands/{id}/priority`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePriorityResponse {
    pub id: String,
    pub priority: Option<u8>,
}

impl ApiClient {
    /// `GET /demands`
    pub async fn list_demands(&self, filters: &DemandFilters) -> Result<DemandPage> {
        self.get_json(&format!("/demands{}", filters.to_query())).await
    }

    /// `GET /demands/{id}`
    pub async fn get_demand(&self, id: &str) -> Result<DemandDetail> {
        self.get_json(&format!("/demands/{}", id)).await
    }

    /// `GET /demands/protocol/{protocol}`
    pub async fn get_demand_by_protocol(&self, protocol: &str) -> Result<DemandDetail> {
        self.get_json(&format!("/demands/protocol/{}", protocol)).await
    }

    /// `POST /demands/{id}/status`
    pub async fn change_demand_status(
        &self,
        id: &str,
        request: &ChangeStatusRequest,
    ) -> Result<ChangeStatusResponse> {
        self.send_json(Method::POST, &format!("/demands/{}/status", id), request)
            .await
    }

    /// `PUT /demands/{id}` - succeeds with no response body
    pub async fn update_demand(&self, id: &str, request: &UpdateDemandRequest) -> Result<()> {
        self.send_json_no_body(Method::PUT, &format!("/demands/{}", id), request)
            .await
    }

    /// `PATCH /demands/{id}/priority`
    pub async fn update_demand_priority(
        &self,
        id: &str,
        priority: Option<u8>,
    ) -> Result<UpdatePriorityResponse> {
        self.send_json(
            Method::PATCH,
            &format!("/demands/{}/priority", id),
            &UpdatePriorityRequest { priority },
        )
        .await
    }
}
