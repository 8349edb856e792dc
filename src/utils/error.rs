// Common error types for trainctl

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
}

pub type Result<T> = std::result::Result<T, LauncherError>;

/// User-facing error presentation with an exit code for `main`
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub exit_code: i32,
}

impl UserError {
    /// Convert an internal error into its user-facing form
    pub fn from_launcher_error(err: &LauncherError) -> Self {
        let exit_code = match err {
            LauncherError::ConfigError(_) | LauncherError::ValidationError(_) => 2,
            LauncherError::IoError(_) | LauncherError::ExecutionError(_) => 1,
        };

        Self {
            message: err.to_string(),
            exit_code,
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("Error: {}", self.message);
    }
}
