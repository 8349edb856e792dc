use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use crate::services::launcher::TrainingLauncher;
use crate::utils::config::ConfigParser;
use crate::utils::error::{LauncherError, Result};

/// Show the effective configuration and training command line
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Path to a launch configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long)]
    pub json: bool,
}

impl ShowCommand {
    /// Execute the show command
    pub async fn run(&self) -> Result<()> {
        let config = ConfigParser::load_or_default(self.config.as_deref())?;

        // Display only; the interpreter is not resolved here
        let python = config
            .launcher
            .python
            .clone()
            .unwrap_or_else(|| "python3".to_string());
        let launcher = TrainingLauncher::new(python, config.launcher.script.clone());

        if self.json {
            let command = launcher.command_line(&config.training);
            let response = json!({
                "training": config.training,
                "launcher": config.launcher,
                "command": command,
            });
            println!(
                "{}",
                serde_json::to_string_pretty(&response).map_err(|e| {
                    LauncherError::ConfigError(format!("JSON serialization error: {}", e))
                })?
            );
            return Ok(());
        }

        println!("Training configuration:");
        println!("  batch_size: {}", config.training.batch_size);
        println!("  training_epochs: {}", config.training.training_epochs);
        println!("  learning_rate: {}", config.training.learning_rate);
        println!("  seed: {}", config.training.seed);
        println!("  device: {}", config.training.device);
        println!("  name: {}", config.training.name);
        println!("  train_set: {}", config.training.train_set);
        println!("  valid_set: {}", config.training.valid_set);
        println!("  level: {}", config.training.level);
        println!(
            "  neighbors_to_predict: {}",
            config.training.neighbors_to_predict
        );
        println!("  modalities: {}", config.training.modalities);
        println!("  future_len: {}", config.training.future_len);
        println!("  encoder_layers: {}", config.training.encoder_layers);
        println!();
        println!("Command:");
        println!("  {}", launcher.render(&config.training));

        Ok(())
    }
}
