use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::models::launch_config::LaunchConfig;
use crate::services::launcher::TrainingLauncher;
use crate::services::python_probe::PythonProbe;
use crate::utils::config::ConfigParser;
use crate::utils::error::{LauncherError, Result};
use crate::utils::validation::{parse_package_list, validate_experiment_name};

/// Walk through the guided single-process training launch
#[derive(Debug, Args)]
pub struct LaunchCommand {
    /// Path to a launch configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Comma-separated package list to probe
    #[arg(long)]
    pub packages: Option<String>,

    /// Override the training set path
    #[arg(long)]
    pub train_set: Option<String>,

    /// Override the validation set path
    #[arg(long)]
    pub valid_set: Option<String>,

    /// Override the training device (cuda/cpu)
    #[arg(long)]
    pub device: Option<String>,

    /// Override the experiment name
    #[arg(long)]
    pub name: Option<String>,

    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,

    /// Actually spawn the training process (default is print-only)
    #[arg(long)]
    pub run: bool,
}

impl LaunchCommand {
    /// Execute the launch command
    pub async fn execute(&self) -> Result<()> {
        println!("Single-Process Training Setup");
        println!("{}", "=".repeat(50));

        let config = self.load_config()?;

        // Check requirements before anything else
        let packages = match &self.packages {
            Some(raw) => parse_package_list(raw)?,
            None => config.launcher.packages.clone(),
        };

        let probe = PythonProbe::new();
        let python = probe.find_python(config.launcher.python.as_deref()).await?;
        let report = probe.probe_packages(&python, &packages).await?;

        if !report.is_satisfied() {
            println!("Missing required packages: {}", report.missing.join(", "));
            println!("Please install them using:");
            println!("  {}", report.install_hint());
            return Ok(());
        }

        println!("All required packages are available.");

        println!();
        println!("Key changes from the distributed training setup:");
        println!("1. Removed distributed training (DDP, DistributedSampler)");
        println!("2. Removed multiprocessing (num_workers=0)");
        println!("3. Added device parameter (cuda/cpu)");
        println!("4. Simplified logging (no rank checks)");
        println!("5. Removed distributed process group initialization");

        println!();
        println!("To run training:");
        println!("1. First process your data using data_process.py");
        println!("2. Set the train_set and valid_set paths (launch.toml or --train-set/--valid-set)");
        println!("3. Re-run: trainctl launch");

        let confirmed = self.yes || Self::confirm()?;
        if !confirmed {
            return Ok(());
        }

        let launcher = TrainingLauncher::new(
            python.executable.to_string_lossy().to_string(),
            config.launcher.script.clone(),
        );

        println!();
        println!("Running single-process training with command:");
        println!("{}", launcher.render(&config.training));
        println!();
        println!("Note: Make sure to replace the data paths with actual paths to your processed data.");
        println!("The processed data should be .npz files created by the data_process.py script.");

        if self.run {
            launcher.execute(&config.training).await?;
            println!("Training finished successfully.");
        }

        Ok(())
    }

    /// Load the launch configuration and apply command-line overrides
    fn load_config(&self) -> Result<LaunchConfig> {
        let mut config = ConfigParser::load_or_default(self.config.as_deref())?;

        if let Some(train_set) = &self.train_set {
            config.training.train_set = train_set.clone();
        }
        if let Some(valid_set) = &self.valid_set {
            config.training.valid_set = valid_set.clone();
        }
        if let Some(device) = &self.device {
            config.training.device = device.clone();
        }
        if let Some(name) = &self.name {
            validate_experiment_name(name)?;
            config.training.name = name.clone();
        }

        // Re-validate after overrides
        config.validate().map_err(LauncherError::ValidationError)?;

        Ok(config)
    }

    /// Ask for confirmation; affirmative only on a single "y"/"Y"
    fn confirm() -> Result<bool> {
        print!("\nDo you want to run the training now? (y/n): ");
        io::stdout().flush()?;

        let mut response = String::new();
        io::stdin().lock().read_line(&mut response)?;

        Ok(response.trim().eq_ignore_ascii_case("y"))
    }
}
