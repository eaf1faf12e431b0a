//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path and return its config.
pub fn init(path: &Path, owner: Option<String>) -> Result<Config> {
    // Validate before touching the file system
    let config = Config::new(owner)?;

    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&config)?;

    tracing::info!(path = %path.display(), owner = %config.owner, "initialized journal");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolaceError;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_journal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal");

        let config = init(&path, Some("alex".to_string())).unwrap();
        assert_eq!(config.owner, "alex");
        assert!(path.join(".solace/config.toml").is_file());

        let loaded = Config::load_from_dir(&path).unwrap();
        assert_eq!(loaded.owner, "alex");
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path(), Some("alex".to_string())).unwrap();

        match init(temp.path(), Some("sam".to_string())).unwrap_err() {
            SolaceError::Config(msg) => assert!(msg.contains("already initialized")),
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert_eq!(Config::load_from_dir(temp.path()).unwrap().owner, "alex");
    }

    #[test]
    fn test_init_rejects_bad_owner_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal");

        assert!(init(&path, Some("a/b".to_string())).is_err());
        assert!(!path.exists());
    }
}
