use serde::{Deserialize, Serialize};

use crate::models::training_config::TrainingConfig;

/// Packages probed by default before a launch
pub const DEFAULT_PACKAGES: &[&str] = &["torch", "numpy", "matplotlib", "tqdm"];

/// Settings for how the training process itself is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Training script to launch
    pub script: String,
    /// Explicit Python interpreter (discovered on PATH when unset)
    pub python: Option<String>,
    /// Packages that must be importable before launching
    pub packages: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            script: "train.py".to_string(),
            python: None,
            packages: DEFAULT_PACKAGES.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Full launch configuration as read from launch.toml.
///
/// Both sections are optional in the file; missing fields fall back to the
/// documented single-process defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub training: TrainingConfig,
    pub launcher: LauncherConfig,
}

impl LaunchConfig {
    /// Validate the configuration according to business rules
    pub fn validate(&self) -> Result<(), String> {
        self.training.validate()?;

        if self.launcher.script.trim().is_empty() {
            return Err("Training script path cannot be empty".to_string());
        }

        if self.launcher.packages.is_empty() {
            return Err("Probe package list cannot be empty".to_string());
        }

        if let Some(python) = &self.launcher.python {
            if python.trim().is_empty() {
                return Err("Python interpreter path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
