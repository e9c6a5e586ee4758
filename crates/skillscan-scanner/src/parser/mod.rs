//! Parsers for skill headers and assistant configuration files

pub mod frontmatter;
pub mod mcp;
pub mod settings;

pub use frontmatter::{parse_frontmatter, split_metadata, Metadata};
pub use mcp::{parse_mcp_servers, McpServerEntry};
pub use settings::parse_enabled_plugins;

use crate::error::{ScanError, ScanResult};
use crate::fsutil::is_file;
use std::fs;
use std::path::Path;

/// Read and parse a JSON file
pub(crate) fn read_json_file(path: &Path) -> ScanResult<serde_json::Value> {
    if !is_file(path) {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Borrow a string field of a JSON object, `""` when missing or not a string
pub(crate) fn str_field<'a>(value: &'a serde_json::Value, key: &str) -> &'a str {
    value.get(key).and_then(serde_json::Value::as_str).unwrap_or("")
}
