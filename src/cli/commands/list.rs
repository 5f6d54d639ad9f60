//! List command - List demands with optional filtering

use std::path::Path;

use crate::api::{ApiClient, DemandFilters};
use crate::config::load_config;
use crate::errors::Result;
use crate::schemas::DemandStatus;

/// List demands, optionally filtered by status or free text
pub async fn run(
    cwd: Option<&Path>,
    json: bool,
    status: Option<DemandStatus>,
    query: Option<String>,
    page: u32,
) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let filters = DemandFilters {
        status,
        q: query,
        page: Some(page),
        size: Some(config.page_size),
    };
    let result = client.list_demands(&filters).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result.items).map_err(
            |e| crate::errors::DemandasError::InvalidJson(e.to_string()),
        )?);
        return Ok(());
    }

    if result.items.is_empty() {
        println!("No demands found");
        return Ok(());
    }

    println!("{:<12} {:<14} {:<14} {:<9} {}", "ID", "PROTOCOL", "STATUS", "PRIORITY", "BACKLOG");
    for demand in &result.items {
        let priority = demand
            .priority
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        let backlog = demand.backlog_id.as_deref().unwrap_or("-");
        println!(
            "{:<12} {:<14} {:<14} {:<9} {}",
            demand.id,
            demand.protocol,
            demand.status.to_string(),
            priority,
            backlog
        );
    }
    println!("\nPage {} ({} total)", result.page, result.total);
    Ok(())
}
