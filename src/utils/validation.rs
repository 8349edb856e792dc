// Common validation utilities for trainctl CLI commands

use crate::utils::error::{LauncherError, Result};

/// Validate an experiment name (forwarded as `--name` to the training script)
pub fn validate_experiment_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LauncherError::ValidationError(
            "Experiment name cannot be empty.".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(LauncherError::ValidationError(format!(
            "Invalid experiment name '{}'.\n\nValid names contain only letters, digits, '-' and '_':\n  ✓ SingleProcess_Exp\n  ✓ baseline-v2\n  ✗ my experiment",
            name
        )));
    }

    Ok(())
}

/// Validate a Python module name before it is interpolated into an
/// interpreter command line (`python -c "import <name>"`).
///
/// Dotted submodule paths are accepted; each segment must be a valid
/// Python identifier.
pub fn validate_python_module_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LauncherError::ValidationError(
            "Package name cannot be empty.".to_string(),
        ));
    }

    let valid = name.split('.').all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
            }
            _ => false,
        }
    });

    if !valid {
        return Err(LauncherError::ValidationError(format!(
            "Invalid package name '{}'.\n\nValid importable module names:\n  ✓ torch\n  ✓ matplotlib.pyplot\n  ✗ my package",
            name
        )));
    }

    Ok(())
}

/// Parse a comma-separated `--packages` override into a validated list
pub fn parse_package_list(raw: &str) -> Result<Vec<String>> {
    let packages: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if packages.is_empty() {
        return Err(LauncherError::ValidationError(
            "Package list cannot be empty.\n\nExample: trainctl check --packages torch,numpy".to_string(),
        ));
    }

    for package in &packages {
        validate_python_module_name(package)?;
    }

    Ok(packages)
}
