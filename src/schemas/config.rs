//! Config schema - Configuration for the demandas CLI

use serde::{Deserialize, Serialize};

/// Main configuration for the demandas CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base URL of the backend API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,

    /// Default author recorded on status changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Default page size for list operations
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout_seconds() -> u32 {
    30
}

fn default_page_size() -> u32 {
    20
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: 1,
            base_url: default_base_url(),
            timeout_seconds: 30,
            user: None,
            page_size: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.base_url, "http://localhost:5000/api");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.page_size, 20);
        assert!(config.user.is_none());
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.timeout_seconds, config.timeout_seconds);
    }

    #[test]
    fn test_config_partial_json() {
        // Simulate a config file with only some fields set
        let json = r#"{"base_url": "https://demandas.example.com/api", "user": "ana"}"#;
        let parsed: Config = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.base_url, "https://demandas.example.com/api");
        assert_eq!(parsed.user.as_deref(), Some("ana"));
        // Other fields should have defaults
        assert_eq!(parsed.timeout_seconds, 30);
        assert_eq!(parsed.page_size, 20);
    }
}
