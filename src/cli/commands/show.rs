//! Show command - Show a demand with its status history

use std::path::Path;

use crate::api::{ApiClient, DemandDetail};
use crate::config::load_config;
use crate::domain::{RegressionAnalyzer, Severity, TransitionGraph};
use crate::errors::{DemandasError, Result};

/// Show a demand's detail, history, and available next statuses
pub async fn run(cwd: Option<&Path>, id: &str, by_protocol: bool, json: bool) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let detail = if by_protocol {
        client.get_demand_by_protocol(id).await?
    } else {
        client.get_demand(id).await?
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&detail.demand)
                .map_err(|e| DemandasError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    print_detail(&detail);
    Ok(())
}

fn print_detail(detail: &DemandDetail) {
    let demand = &detail.demand;
    let graph = TransitionGraph::new();

    println!("Demand {} (protocol {})", demand.id, demand.protocol);
    println!("  Status:   {}", demand.status);
    if let Some(priority) = demand.priority {
        println!("  Priority: {}", priority);
    }
    if let Some(backlog_id) = &demand.backlog_id {
        println!("  Backlog:  {}", backlog_id);
    }
    if let Some(date) = demand.estimated_delivery {
        println!("  Estimated delivery: {}", date.format("%Y-%m-%d"));
    }
    if let Some(description) = &detail.description {
        println!("  {}", description);
    }

    let next = graph.allowed_next(demand.status);
    if next.is_empty() {
        println!("  (closed - no further transitions)");
    } else {
        let names: Vec<String> = next.iter().map(|s| s.to_string()).collect();
        println!("  Next: {}", names.join(", "));
    }

    let log = detail.history_log();
    if log.is_empty() {
        return;
    }

    let analyzer = RegressionAnalyzer::new(graph);
    let counts = analyzer.rework_counts(&log);

    println!("\nHistory:");
    for entry in log.chronological() {
        let marker = match Severity::from_count(counts.get(&entry.status).copied().unwrap_or(0)) {
            Severity::None => "",
            Severity::Amber => " [rework]",
            Severity::Red => " [rework!]",
        };
        println!(
            "  {}  {:<14} {} - {}{}",
            entry.date.format("%Y-%m-%d %H:%M"),
            entry.status.to_string(),
            entry.author,
            entry.note,
            marker
        );
    }

    // Consistency check between the log and the demand's current status
    if let Some(latest) = log.latest() {
        if latest.status != demand.status {
            println!(
                "\nWarning: history ends at {} but the demand reports {}",
                latest.status, demand.status
            );
        }
    }
}
