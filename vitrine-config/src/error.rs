// Error types for configuration loading

use crate::FileFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {format:?} configuration: {reason}")]
    Parse { format: FileFormat, reason: String },

    #[error("Failed to load .env file: {0}")]
    Dotenv(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
