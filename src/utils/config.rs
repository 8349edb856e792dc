// Configuration utilities and TOML parsing

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::launch_config::LaunchConfig;
use crate::utils::error::{LauncherError, Result};

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load and validate a launch configuration from a TOML file
    pub fn load_launch_config<P: AsRef<Path>>(path: P) -> Result<LaunchConfig> {
        let path = path.as_ref();

        // Check if file exists
        if !path.exists() {
            return Err(LauncherError::ConfigError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        // Read file contents
        let content = fs::read_to_string(path).map_err(|e| {
            LauncherError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_launch_config(&content)
    }

    /// Parse a launch configuration from a TOML string with validation
    pub fn parse_launch_config(content: &str) -> Result<LaunchConfig> {
        let config: LaunchConfig = toml::from_str(content)
            .map_err(|e| LauncherError::ConfigError(format!("Invalid TOML syntax: {}", e)))?;

        config.validate().map_err(LauncherError::ValidationError)?;

        Ok(config)
    }

    /// Resolve the effective configuration for a command.
    ///
    /// An explicit `--config` path must exist; otherwise launch.toml in the
    /// working directory is used when present, and the documented defaults
    /// when it is not.
    pub fn load_or_default(path: Option<&Path>) -> Result<LaunchConfig> {
        match path {
            Some(explicit) => Self::load_launch_config(explicit),
            None => {
                let default_path = get_launch_config_path();
                if default_path.exists() {
                    Self::load_launch_config(&default_path)
                } else {
                    Ok(LaunchConfig::default())
                }
            }
        }
    }
}

pub fn get_launch_config_path() -> PathBuf {
    PathBuf::from("launch.toml")
}
