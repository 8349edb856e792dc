use std::path::PathBuf;
use std::process::Command;

use crate::models::probe_report::{ProbeReport, PythonInfo};
use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::validate_python_module_name;

/// Resolves a Python interpreter and probes packages for importability
#[derive(Debug, Clone, Default)]
pub struct PythonProbe;

impl PythonProbe {
    pub fn new() -> Self {
        Self
    }

    /// Find an available Python interpreter.
    ///
    /// A configured interpreter is tried first and treated as fatal when it
    /// does not resolve; otherwise common executable names are tried in order.
    pub async fn find_python(&self, explicit: Option<&str>) -> Result<PythonInfo> {
        if let Some(python_cmd) = explicit {
            return self.get_python_info(python_cmd).await;
        }

        let python_names = [
            "python3",
            "python",
            "python3.12",
            "python3.11",
            "python3.10",
            "python3.9",
        ];

        for name in &python_names {
            if let Ok(info) = self.get_python_info(name).await {
                return Ok(info);
            }
        }

        Err(LauncherError::ValidationError(
            "No suitable Python executable found. Please install Python 3.8 or later.".to_string(),
        ))
    }

    /// Probe a set of packages for importability with the given interpreter
    pub async fn probe_packages(
        &self,
        python: &PythonInfo,
        packages: &[String],
    ) -> Result<ProbeReport> {
        let mut missing = Vec::new();

        for package in packages {
            // Names are interpolated into an interpreter command line
            validate_python_module_name(package)?;

            let import_stmt = format!("import {}", package);
            let import_check = Command::new(&python.executable)
                .args(["-c", import_stmt.as_str()])
                .output()
                .map_err(|e| {
                    LauncherError::ExecutionError(format!(
                        "Failed to run {}: {}",
                        python.executable.display(),
                        e
                    ))
                })?;

            if !import_check.status.success() {
                missing.push(package.clone());
            }
        }

        Ok(ProbeReport {
            python: python.clone(),
            checked: packages.to_vec(),
            missing,
        })
    }

    /// Get information about a Python executable
    async fn get_python_info(&self, python_cmd: &str) -> Result<PythonInfo> {
        // Get Python version
        let version_output = Command::new(python_cmd)
            .arg("--version")
            .output()
            .map_err(|_| {
                LauncherError::ValidationError(format!("Python not found: {}", python_cmd))
            })?;

        if !version_output.status.success() {
            return Err(LauncherError::ValidationError(format!(
                "Invalid Python executable: {}",
                python_cmd
            )));
        }

        let version_str = String::from_utf8_lossy(&version_output.stdout);
        let version = version_str
            .trim()
            .strip_prefix("Python ")
            .unwrap_or(version_str.trim())
            .to_string();

        // Get executable path
        let which_output = Command::new(python_cmd)
            .args(["-c", "import sys; print(sys.executable)"])
            .output()
            .map_err(|_| {
                LauncherError::ValidationError(
                    "Failed to get Python executable path".to_string(),
                )
            })?;

        if !which_output.status.success() {
            return Err(LauncherError::ValidationError(format!(
                "Invalid Python executable: {}",
                python_cmd
            )));
        }

        let executable_str = String::from_utf8_lossy(&which_output.stdout);
        let executable = PathBuf::from(executable_str.trim());

        Ok(PythonInfo {
            executable,
            version,
        })
    }
}
