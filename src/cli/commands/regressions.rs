//! Regressions command - Rework counts derived from a demand's history

use std::collections::BTreeMap;
use std::path::Path;

use crate::api::ApiClient;
use crate::config::load_config;
use crate::domain::{RegressionAnalyzer, Severity, ALL_STATUSES};
use crate::errors::{DemandasError, Result};

pub async fn run(cwd: Option<&Path>, id: &str, json: bool) -> Result<()> {
    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let detail = client.get_demand(id).await?;
    let log = detail.history_log();

    let analyzer = RegressionAnalyzer::default();
    let counts = analyzer.rework_counts(&log);

    if json {
        // Status name -> count, stable key order
        let by_name: BTreeMap<String, u32> = counts
            .iter()
            .map(|(status, count)| (status.to_string(), *count))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&by_name)
                .map_err(|e| DemandasError::InvalidJson(e.to_string()))?
        );
        return Ok(());
    }

    println!(
        "Rework for demand {} ({} history entries)",
        detail.demand.protocol,
        log.len()
    );
    if counts.is_empty() {
        println!("  No rework detected");
        return Ok(());
    }

    for &status in ALL_STATUSES {
        let Some(&count) = counts.get(&status) else {
            continue;
        };
        let severity = Severity::from_count(count);
        let label = match severity {
            Severity::None => "",
            Severity::Amber => " (amber)",
            Severity::Red => " (red)",
        };
        println!("  {:<14} {}{}", status.to_string(), count, label);
    }
    Ok(())
}
