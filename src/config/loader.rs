//! Configuration loading with defaults and environment overrides

use std::path::Path;

use crate::errors::Result;
use crate::fs;
use crate::schemas::Config;

/// Environment variable overriding the backend base URL
pub const ENV_BASE_URL: &str = "DEMANDAS_API_URL";

/// Load configuration for the given working directory.
///
/// Resolution order: `.demandas/config.json` found by walking up from the
/// working directory, then defaults for anything unset. `DEMANDAS_API_URL`
/// overrides the base URL regardless of the file.
pub fn load_config(cwd: Option<&Path>) -> Result<Config> {
    let start = fs::resolve_cwd(cwd);

    let mut config = match fs::find_config_root(&start) {
        Some(root) => {
            let path = fs::get_config_path(&root);
            if path.exists() {
                fs::read_json(&path)?
            } else {
                Config::default()
            }
        }
        None => Config::default(),
    };

    if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
        if !base_url.is_empty() {
            config.base_url = base_url;
        }
    }

    Ok(config)
}
