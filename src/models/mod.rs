// Models module for data structures
pub mod launch_config;
pub mod probe_report;
pub mod training_config;
