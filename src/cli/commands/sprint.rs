//! Sprint commands - Kanban board view, item moves, burndown
//!
//! Moves are remote-first: the backend is asked first, and the local board
//! only updates after it accepts. A failed move leaves the local view as the
//! backend last reported it.

use std::path::Path;

use tracing::debug;

use crate::api::ApiClient;
use crate::config::load_config;
use crate::domain::{MoveOutcome, SprintBoard};
use crate::errors::{DemandasError, Result};
use crate::schemas::{SprintItemStatus, ALL_COLUMNS};

pub async fn list(cwd: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let sprints = client.list_sprints().await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&sprints)
                .map_err(|e| DemandasError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    if sprints.is_empty() {
        println!("No sprints found");
        return Ok(());
    }

    println!("{:<12} {:<24} {:<12} {:<12} {}", "ID", "NAME", "START", "END", "ITEMS");
    for sprint in &sprints {
        println!(
            "{:<12} {:<24} {:<12} {:<12} {}",
            sprint.id,
            sprint.name,
            sprint.start_date.format("%Y-%m-%d"),
            sprint.end_date.format("%Y-%m-%d"),
            sprint.items.len()
        );
    }
    Ok(())
}

pub async fn show(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let sprint = client.get_sprint(id).await?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&sprint)
                .map_err(|e| DemandasError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    println!(
        "Sprint {} ({} - {})",
        sprint.name,
        sprint.start_date.format("%Y-%m-%d"),
        sprint.end_date.format("%Y-%m-%d")
    );

    let board = SprintBoard::from_items(sprint.items);
    for &column in ALL_COLUMNS {
        let items = board.items_in(column);
        println!("\n{} ({})", column, items.len());
        for item in items {
            println!(
                "  {:<12} demand {:<12} {:.1}h / {:.1}h",
                item.id, item.demand_id, item.worked_hours, item.planned_hours
            );
        }
    }
    Ok(())
}

pub async fn move_item(
    cwd: Option<&Path>,
    sprint_id: &str,
    item_id: &str,
    column: SprintItemStatus,
) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let sprint = client.get_sprint(sprint_id).await?;
    let mut board = SprintBoard::from_items(sprint.items);

    let current = board
        .item(item_id)
        .ok_or_else(|| DemandasError::ItemNotFound(item_id.to_string()))?
        .status;
    if current == column {
        println!("Item {} already in {}", item_id, column);
        return Ok(());
    }

    // Backend first. Only a confirmed move updates the local board, so a
    // network failure never leaves the view ahead of the server.
    let response = client.update_sprint_item_status(item_id, column).await?;
    debug!(item = %item_id, status = %response.status, "move accepted");

    match board.move_item(item_id, response.status)? {
        MoveOutcome::Moved { from, to } => {
            println!("Item {} moved: {} -> {}", item_id, from, to);
        }
        MoveOutcome::NoOp => {
            println!("Item {} already in {}", item_id, response.status);
        }
    }
    Ok(())
}

pub async fn burndown(cwd: Option<&Path>, id: &str) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let points = client.get_burndown(id).await?;
    if points.is_empty() {
        println!("No burndown data");
        return Ok(());
    }

    println!("{:<12} {:>9} {:>10}", "DATE", "PLANNED", "REMAINING");
    for point in &points {
        println!("{:<12} {:>9.1} {:>10.1}", point.date, point.planned, point.remaining);
    }
    Ok(())
}
