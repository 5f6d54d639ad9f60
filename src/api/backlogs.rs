//! Backlog endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::schemas::{Backlog, Demand};

use super::client::ApiClient;

/// One page of the backlog list
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogPage {
    #[serde(default)]
    pub data: Vec<Backlog>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub total: u64,
}

/// Backlog detail with its member demands resolved
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BacklogDetail {
    #[serde(flatten)]
    pub backlog: Backlog,
    #[serde(default)]
    pub demands: Vec<Demand>,
}

/// Body of `POST /backlogs`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBacklogRequest {
    pub name: String,
    pub demand_ids: Vec<String>,
}

/// Response of `POST /backlogs`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBacklogResponse {
    pub id: String,
    pub name: String,
}

/// Body of `POST /backlogs/{id}/demands`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDemandsRequest {
    pub demand_ids: Vec<String>,
}

impl ApiClient {
    /// `GET /backlogs`
    pub async fn list_backlogs(&self, page: u32, page_size: u32) -> Result<BacklogPage> {
        self.get_json(&format!("/backlogs?page={}&pageSize={}", page, page_size))
            .await
    }

    /// `GET /backlogs/{id}`
    pub async fn get_backlog(&self, id: &str) -> Result<BacklogDetail> {
        self.get_json(&format!("/backlogs/{}", id)).await
    }

    /// `POST /backlogs`
    pub async fn create_backlog(
        &self,
        request: &CreateBacklogRequest,
    ) -> Result<CreateBacklogResponse> {
        self.send_json(Method::POST, "/backlogs", request).await
    }

    /// `POST /backlogs/{id}/demands`
    pub async fn add_demands_to_backlog(
        &self,
        backlog_id: &str,
        demand_ids: Vec<String>,
    ) -> Result<()> {
        self.send_json_no_body(
            Method::POST,
            &format!("/backlogs/{}/demands", backlog_id),
            &AddDemandsRequest { demand_ids },
        )
        .await
    }
}
