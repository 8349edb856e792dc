// CLI module for command-line interface

pub mod check;
pub mod launch;
pub mod show;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::error::Result;

use self::check::CheckCommand;
use self::launch::LaunchCommand;
use self::show::ShowCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "trainctl")]
#[command(about = "A launch helper for single-process model training runs")]
#[command(long_about = r#"trainctl prepares and launches single-process training runs for the
interaction prediction model without distributed training.

Features:
  • Probes required Python packages before launching
  • Explains configuration changes relative to the distributed setup
  • Prints the exact training command line before anything runs
  • Optional launch.toml for hyperparameter overrides
  • Interactive confirmation, with --yes for scripted use

Examples:
  trainctl check                Verify torch, numpy, matplotlib and tqdm
  trainctl show                 Print the effective training command line
  trainctl launch               Walk through the guided launch flow
  trainctl launch --yes --run   Launch training without prompting"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check that the required Python packages are importable
    #[command(long_about = r#"Check that the training dependencies are importable.

Resolves a Python interpreter (the one configured in launch.toml, or the
first of python3/python found on PATH) and attempts to import each required
package. Missing packages are listed with an install hint; a missing package
is reported, not treated as a failure.

Examples:
  trainctl check                        Probe the default package set
  trainctl check --packages torch,tqdm  Probe a custom package list
  trainctl check --json                 Machine-readable probe report"#)]
    Check {
        /// Comma-separated package list to probe (default: torch,numpy,matplotlib,tqdm)
        #[arg(long)]
        packages: Option<String>,

        /// Path to a launch configuration file (default: launch.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration and training command line
    #[command(long_about = r#"Show the effective training configuration and the exact command line
that 'trainctl launch' would use. Nothing is probed and nothing runs.

Examples:
  trainctl show                         Human-readable configuration
  trainctl show --config my.toml        Use a specific configuration file
  trainctl show --json                  Machine-readable configuration"#)]
    Show {
        /// Path to a launch configuration file (default: launch.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Walk through the guided single-process training launch
    #[command(long_about = r#"Guided launch flow for single-process training.

Checks the required packages, explains what differs from the distributed
training setup, prints the exact training command and asks for confirmation.
By default the command is only printed; pass --run to actually spawn the
training process.

Examples:
  trainctl launch                       Interactive, print-only
  trainctl launch --yes                 Skip the confirmation prompt
  trainctl launch --yes --run           Actually start training
  trainctl launch --train-set data/train --valid-set data/valid"#)]
    Launch {
        /// Path to a launch configuration file (default: launch.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Comma-separated package list to probe (default: torch,numpy,matplotlib,tqdm)
        #[arg(long)]
        packages: Option<String>,

        /// Override the training set path
        #[arg(long)]
        train_set: Option<String>,

        /// Override the validation set path
        #[arg(long)]
        valid_set: Option<String>,

        /// Override the training device (cuda/cpu)
        #[arg(long)]
        device: Option<String>,

        /// Override the experiment name
        #[arg(long)]
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,

        /// Actually spawn the training process (default is print-only)
        #[arg(long)]
        run: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Check {
                packages,
                config,
                json,
            } => {
                let cmd = CheckCommand {
                    packages,
                    config,
                    json,
                };
                cmd.execute().await
            }

            Commands::Show { config, json } => {
                let cmd = ShowCommand { config, json };
                cmd.run().await
            }

            Commands::Launch {
                config,
                packages,
                train_set,
                valid_set,
                device,
                name,
                yes,
                run,
            } => {
                let cmd = LaunchCommand {
                    config,
                    packages,
                    train_set,
                    valid_set,
                    device,
                    name,
                    yes,
                    run,
                };
                cmd.execute().await
            }
        }
    }
}
