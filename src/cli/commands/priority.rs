//! Priority command - Set, change, or clear a demand's priority
//!
//! First assignment applies immediately. Replacing or clearing an
//! already-set priority needs `--yes`, otherwise the command exits with
//! `ConfirmationRequired` and changes nothing.

use std::path::Path;

use crate::api::ApiClient;
use crate::config::load_config;
use crate::domain::{classify_priority_change, validate_priority, PriorityChange};
use crate::errors::{DemandasError, Result};

pub async fn run(cwd: Option<&Path>, id: &str, value: &str, yes: bool) -> Result<()> {
    let requested = parse_value(value)?;
    validate_priority(requested)?;

    let config = load_config(cwd)?;
    let client = ApiClient::from_config(&config)?;

    let detail = client.get_demand(id).await?;
    let current = detail.demand.priority;

    match classify_priority_change(current, requested) {
        PriorityChange::Unchanged => {
            println!(
                "Priority of {} already {}",
                detail.demand.protocol,
                describe(current)
            );
            return Ok(());
        }
        PriorityChange::Immediate => {}
        PriorityChange::RequiresConfirmation if yes => {}
        PriorityChange::RequiresConfirmation => {
            return Err(DemandasError::ConfirmationRequired(format!(
                "priority of {} is {}; pass --yes to change it to {}",
                detail.demand.protocol,
                describe(current),
                describe(requested)
            )));
        }
    }

    let response = client.update_demand_priority(id, requested).await?;
    println!(
        "Priority of {}: {} -> {}",
        detail.demand.protocol,
        describe(current),
        describe(response.priority)
    );
    Ok(())
}

fn parse_value(value: &str) -> Result<Option<u8>> {
    if value.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    value
        .parse::<u8>()
        .map(Some)
        .map_err(|_| DemandasError::SchemaValidation(format!(
            "invalid priority {:?} (expected 1-5 or \"none\")",
            value
        )))
}

fn describe(priority: Option<u8>) -> String {
    match priority {
        Some(p) => p.to_string(),
        None => "unset".to_string(),
    }
}
