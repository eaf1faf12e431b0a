//! Config management use case

use crate::domain::validation::validate_owner;
use crate::error::{Result, SolaceError};
use crate::infrastructure::{Config, FileSystemRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "owner" => Ok(config.owner.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SolaceError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: owner, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "owner" => {
                let owner = value.trim();
                validate_owner(owner)?;
                config.owner = owner.to_string();
            }
            "created" => {
                return Err(SolaceError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SolaceError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: owner",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
