// Utility module for configuration, validation and errors

pub mod config;
pub mod error;
pub mod validation;
