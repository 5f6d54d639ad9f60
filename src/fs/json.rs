//! JSON file operations with schema validation

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{DemandasError, Result};

/// Read and deserialize a JSON file.
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `InvalidJson` - If the file contains invalid JSON
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DemandasError::FileNotFound(format!("File not found: {}", path.display()))
        } else {
            DemandasError::Io(e)
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        DemandasError::InvalidJson(format!("Invalid JSON in file {}: {}", path.display(), e))
    })
}

/// Write a value to a JSON file with pretty formatting.
///
/// Uses atomic write (write to temp file, then rename) to avoid partial
/// writes.
pub fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content =
        serde_json::to_string_pretty(data).map_err(|e| DemandasError::InvalidJson(e.to_string()))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let temp_path = path.with_extension("json.tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(content.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;
    drop(file);

    fs::rename(&temp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Config;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_file_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.json");

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), DemandasError::FileNotFound(_)));
    }

    #[test]
    fn test_read_json_invalid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("invalid.json");
        fs::write(&path, "not valid json {").unwrap();

        let result: Result<Config> = read_json(&path);
        assert!(matches!(result.unwrap_err(), DemandasError::InvalidJson(_)));
    }

    #[test]
    fn test_write_and_read_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");

        let config = Config::default();
        write_json(&path, &config).unwrap();
        assert!(path.exists());

        let read: Config = read_json(&path).unwrap();
        assert_eq!(read.base_url, config.base_url);
    }

    #[test]
    fn test_write_json_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("config.json");

        write_json(&path, &Config::default()).unwrap();
        assert!(path.exists());
    }
}
