//! Init command - Write a default configuration file

use std::path::Path;

use tracing::info;

use crate::errors::{DemandasError, Result};
use crate::fs;
use crate::schemas::Config;

/// Write a default .demandas/config.json in the working directory
pub async fn run(cwd: Option<&Path>, force: bool) -> Result<()> {
    let root = fs::resolve_cwd(cwd);
    let path = fs::get_config_path(&root);

    if path.exists() && !force {
        return Err(DemandasError::ConfigError(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    fs::write_json(&path, &Config::default())?;
    info!(path = %path.display(), "wrote default config");
    println!("Initialized {}", path.display());
    Ok(())
}
