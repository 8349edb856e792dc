// trainctl - single-process training launcher
// Main CLI entry point

use clap::Parser;
use std::process;
use trainctl::cli::{Cli, CliDispatcher};
use trainctl::utils::error::UserError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli.command).await;

    if let Err(err) = result {
        let user_error = UserError::from_launcher_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
