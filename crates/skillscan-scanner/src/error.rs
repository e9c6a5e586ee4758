//! Error types for the skill scanner
//!
//! Scanning itself never fails: these errors are raised by the internal
//! readers and collapsed to empty contributions where they are consumed.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while reading scanned inputs
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Failed to parse TOML
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Expected file is not present
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Home directory not found
    #[error("Home directory not found")]
    HomeNotFound,
}
