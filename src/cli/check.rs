use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use crate::services::python_probe::PythonProbe;
use crate::utils::config::ConfigParser;
use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::parse_package_list;

/// Check that the required Python packages are importable
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Comma-separated package list to probe
    #[arg(long)]
    pub packages: Option<String>,

    /// Path to a launch configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Execute the check command
    pub async fn execute(&self) -> Result<()> {
        let config = ConfigParser::load_or_default(self.config.as_deref())?;

        let packages = match &self.packages {
            Some(raw) => parse_package_list(raw)?,
            None => config.launcher.packages.clone(),
        };

        let probe = PythonProbe::new();
        let python = probe.find_python(config.launcher.python.as_deref()).await?;
        let report = probe.probe_packages(&python, &packages).await?;

        if self.json {
            let response = json!({
                "status": if report.is_satisfied() { "available" } else { "missing" },
                "python": report.python,
                "checked": report.checked,
                "missing": report.missing,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&response).map_err(|e| {
                    LauncherError::ConfigError(format!("JSON serialization error: {}", e))
                })?
            );
            return Ok(());
        }

        println!(
            "Found Python: {} (version: {})",
            report.python.executable.display(),
            report.python.version
        );

        if report.is_satisfied() {
            println!("All required packages are available.");
        } else {
            println!("Missing required packages: {}", report.missing.join(", "));
            println!("Please install them using:");
            println!("  {}", report.install_hint());
        }

        Ok(())
    }
}
