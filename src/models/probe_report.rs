use serde::Serialize;
use std::path::PathBuf;

/// Information about a resolved Python interpreter
#[derive(Debug, Clone, Serialize)]
pub struct PythonInfo {
    /// Absolute path to the interpreter
    pub executable: PathBuf,
    /// Interpreter version, e.g. "3.11.4"
    pub version: String,
}

/// Outcome of the package importability probe
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    /// The interpreter used for probing
    pub python: PythonInfo,
    /// All package names that were probed
    pub checked: Vec<String>,
    /// The subset that failed to import
    pub missing: Vec<String>,
}

impl ProbeReport {
    /// Whether every probed package is importable
    pub fn is_satisfied(&self) -> bool {
        self.missing.is_empty()
    }

    /// Suggested install command for the missing subset
    pub fn install_hint(&self) -> String {
        format!("pip install {}", self.missing.join(" "))
    }
}
