//! Path resolution utilities for demandas
//!
//! Locates the `.demandas` configuration directory by walking up from the
//! working directory.

use std::path::{Path, PathBuf};

/// Name of the configuration directory
pub const CONFIG_DIR: &str = ".demandas";

/// Resolve the current working directory, optionally using an override.
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Find the nearest directory containing `.demandas`, walking up from
/// `start_cwd`. Returns `None` if there is none; callers fall back to
/// defaults and environment overrides.
pub fn find_config_root(start_cwd: &Path) -> Option<PathBuf> {
    let mut current = start_cwd.canonicalize().ok()?;

    loop {
        if current.join(CONFIG_DIR).is_dir() {
            return Some(current);
        }
        match current.parent() {
            Some(parent) if parent != current => current = parent.to_path_buf(),
            _ => return None,
        }
    }
}

/// Get the path to the .demandas directory.
pub fn get_config_dir(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR)
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_config_dir(root).join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_root_from_root() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();

        let root = find_config_root(temp.path()).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_config_root_from_subdir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join(CONFIG_DIR)).unwrap();
        let subdir = temp.path().join("a").join("b");
        std::fs::create_dir_all(&subdir).unwrap();

        let root = find_config_root(&subdir).unwrap();
        assert_eq!(root, temp.path().canonicalize().unwrap());
    }

    #[test]
    fn test_find_config_root_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_root(temp.path()).is_none());
    }

    #[test]
    fn test_get_config_path() {
        let root = PathBuf::from("/repo");
        assert_eq!(get_config_path(&root), PathBuf::from("/repo/.demandas/config.json"));
    }

    #[test]
    fn test_resolve_cwd_with_override() {
        let path = PathBuf::from("/custom/path");
        assert_eq!(resolve_cwd(Some(&path)), path);
    }

    #[test]
    fn test_resolve_cwd_without_override() {
        assert!(!resolve_cwd(None).as_os_str().is_empty());
    }
}
