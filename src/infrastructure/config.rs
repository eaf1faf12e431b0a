//! Configuration management

use crate::domain::validation::validate_owner;
use crate::error::{Result, SolaceError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const FALLBACK_OWNER: &str = "me";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub owner: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config, detecting the owner when none is given
    pub fn new(owner: Option<String>) -> Result<Self> {
        let owner = match owner {
            Some(owner) => {
                validate_owner(&owner)?;
                owner
            }
            None => Self::detect_default_owner(),
        };

        Ok(Config {
            owner,
            created: Utc::now(),
        })
    }

    /// Load config from .solace/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".solace").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SolaceError::NotSolaceDirectory(path.to_path_buf())
            } else {
                SolaceError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| SolaceError::Config(format!("Failed to parse config.toml: {}", e)))?;
        validate_owner(&config.owner)?;
        Ok(config)
    }

    /// Save config to .solace/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let solace_dir = path.join(".solace");
        let config_path = solace_dir.join("config.toml");

        // Ensure .solace directory exists
        if !solace_dir.exists() {
            fs::create_dir(&solace_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SolaceError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Owner whose entries commands act on; SOLACE_OWNER wins over the file
    pub fn get_owner(&self) -> Result<String> {
        match std::env::var("SOLACE_OWNER") {
            Ok(owner) if !owner.trim().is_empty() => {
                let owner = owner.trim().to_string();
                validate_owner(&owner)?;
                Ok(owner)
            }
            _ => Ok(self.owner.clone()),
        }
    }

    /// Detect a default owner from the login name
    fn detect_default_owner() -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
            .filter(|name| validate_owner(name).is_ok())
            .unwrap_or_else(|| FALLBACK_OWNER.to_string())
    }
}
