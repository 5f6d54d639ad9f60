//! File system utilities for demandas
//!
//! Provides config directory resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_json, write_json};
pub use paths::{find_config_root, get_config_dir, get_config_path, resolve_cwd, CONFIG_DIR};
