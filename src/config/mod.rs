//! Configuration resolution for the demandas CLI

mod loader;

pub use loader::{load_config, ENV_BASE_URL};
