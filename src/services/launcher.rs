use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::models::training_config::TrainingConfig;
use crate::utils::error::{LauncherError, Result};

/// Builds and executes the training command line
#[derive(Debug, Clone)]
pub struct TrainingLauncher {
    /// Interpreter used to run the script
    python: String,
    /// Training script path
    script: String,
}

impl TrainingLauncher {
    pub fn new(python: String, script: String) -> Self {
        Self { python, script }
    }

    /// Full argument vector: interpreter, script, then training flags
    pub fn command_line(&self, config: &TrainingConfig) -> Vec<String> {
        let mut cmd = vec![self.python.clone(), self.script.clone()];
        cmd.extend(config.to_args());
        cmd
    }

    /// Space-joined printable form of the command line
    pub fn render(&self, config: &TrainingConfig) -> String {
        self.command_line(config).join(" ")
    }

    /// Spawn the training process with inherited stdio and wait for it
    pub async fn execute(&self, config: &TrainingConfig) -> Result<()> {
        if !Path::new(&self.script).exists() {
            return Err(LauncherError::ExecutionError(format!(
                "{} not found. Make sure you're in the correct directory.",
                self.script
            )));
        }

        let status = Command::new(&self.python)
            .arg(&self.script)
            .args(config.to_args())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    LauncherError::ExecutionError(format!(
                        "Python interpreter not found: {}",
                        self.python
                    ))
                } else {
                    LauncherError::ExecutionError(format!("Failed to start training: {}", e))
                }
            })?;

        if !status.success() {
            return Err(LauncherError::ExecutionError(format!(
                "Training failed with exit code {}",
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}
