//! Backlog commands - Create, grow, list, and inspect backlogs
//!
//! Creation and add both run the full membership gate locally before the
//! backend call: every selected demand needs a priority and must not be
//! claimed by another backlog. Offenders are reported all at once.

use std::path::Path;

use crate::api::{ApiClient, CreateBacklogRequest};
use crate::config::load_config;
use crate::domain::validate_selection;
use crate::errors::{DemandasError, Result};
use crate::schemas::Demand;

pub async fn create(cwd: Option<&Path>, name: &str, demand_ids: &[String]) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let demands = fetch_selection(&client, demand_ids).await?;
    validate_selection(name, &demands)?;

    let response = client
        .create_backlog(&CreateBacklogRequest {
            name: name.to_string(),
            demand_ids: demand_ids.to_vec(),
        })
        .await?;

    println!(
        "Created backlog {} ({}) with {} demand(s)",
        response.name,
        response.id,
        demands.len()
    );
    Ok(())
}

pub async fn add(cwd: Option<&Path>, backlog_id: &str, demand_ids: &[String]) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    // Existence check before the gate so an unknown backlog id fails fast
    let backlog = client.get_backlog(backlog_id).await?;

    let demands = fetch_selection(&client, demand_ids).await?;
    validate_selection(&backlog.backlog.name, &demands)?;

    client
        .add_demands_to_backlog(backlog_id, demand_ids.to_vec())
        .await?;

    println!(
        "Added {} demand(s) to backlog {}",
        demands.len(),
        backlog.backlog.name
    );
    Ok(())
}

pub async fn list(cwd: Option<&Path>, json: bool, page: u32) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let result = client.list_backlogs(page, config.page_size).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.data)
                .map_err(|e| DemandasError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    if result.data.is_empty() {
        println!("No backlogs found");
        return Ok(());
    }

    println!("{:<12} {:<30} {:<12} {}", "ID", "NAME", "CREATED", "DEMANDS");
    for backlog in &result.data {
        println!(
            "{:<12} {:<30} {:<12} {}",
            backlog.id,
            backlog.name,
            backlog.created_at.format("%Y-%m-%d"),
            backlog.demand_ids.len()
        );
    }
    println!("\nPage {} ({} total)", result.page, result.total);
    Ok(())
}

pub async fn show(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let detail = client.get_backlog(id).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&detail.backlog)
                .map_err(|e| DemandasError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    println!(
        "Backlog {} ({}), created {}",
        detail.backlog.name,
        detail.backlog.id,
        detail.backlog.created_at.format("%Y-%m-%d")
    );
    if detail.demands.is_empty() {
        println!("  (empty)");
        return Ok(());
    }
    for demand in &detail.demands {
        let priority = demand
            .priority
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<12} {:<14} {:<14} priority {}",
            demand.id,
            demand.protocol,
            demand.status.to_string(),
            priority
        );
    }
    Ok(())
}

async fn fetch_selection(client: &ApiClient, demand_ids: &[String]) -> Result<Vec<Demand>> {
    if demand_ids.is_empty() {
        return Err(DemandasError::EmptySelection);
    }
    let mut demands = Vec::with_capacity(demand_ids.len());
    for id in demand_ids {
        demands.push(client.get_demand(id).await?.demand);
    }
    Ok(demands)
}
