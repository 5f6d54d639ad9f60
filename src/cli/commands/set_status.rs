//! Set-status command - Change a demand's lifecycle status
//!
//! The transition is validated locally against the workflow graph before any
//! network call, so an illegal move never reaches the backend. When a new
//! estimated delivery date is given, the command issues a second, separate
//! update after the status change; the status change is never rolled back if
//! that follow-up fails.

use std::path::Path;

use tracing::{debug, warn};

use crate::api::{ApiClient, ChangeStatusRequest, UpdateDemandRequest};
use crate::config::load_config;
use crate::domain::WorkflowEngine;
use crate::errors::{DemandasError, Result};
use crate::schemas::DemandStatus;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    cwd: Option<&Path>,
    id: &str,
    status: DemandStatus,
    note: &str,
    responsible: Option<String>,
    estimated_delivery: Option<String>,
    author: Option<String>,
) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let detail = client.get_demand(id).await?;
    let author = author
        .or(config.user)
        .unwrap_or_else(|| "unknown".to_string());

    // Local validation first: same checks the backend applies, but an
    // illegal move fails here without touching the network.
    let engine = WorkflowEngine::default();
    let mut log = detail.history_log();
    let change = engine.change_status(
        &detail.demand,
        &mut log,
        status,
        note,
        &author,
        responsible.clone(),
    )?;
    debug!(from = %detail.demand.status, to = %status, "transition validated");

    let response = client
        .change_demand_status(
            id,
            &ChangeStatusRequest {
                new_status: status,
                note: note.to_string(),
                responsible_user: responsible,
            },
        )
        .await?;
    println!(
        "Demand {} moved: {} -> {}",
        change.demand.protocol, detail.demand.status, response.status
    );

    // Separate backend operation. The status change above already took
    // effect, so a failure here is reported as a partial result rather
    // than undoing anything.
    if let Some(date) = estimated_delivery {
        let update = UpdateDemandRequest {
            estimated_delivery: Some(date.clone()),
            ..Default::default()
        };
        if let Err(error) = client.update_demand(id, &update).await {
            warn!(%error, "estimated delivery update failed after status change");
            return Err(DemandasError::PartialUpdate(format!(
                "estimated delivery not saved: {}",
                error
            )));
        }
        println!("Estimated delivery set to {}", date);
    }

    Ok(())
}
