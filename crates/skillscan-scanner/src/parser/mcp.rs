//! MCP server configuration parser
//!
//! Used for GitHub Copilot CLI's `mcp-config.json`, which lists servers under
//! either `mcpServers` or `servers`.

use crate::error::ScanResult;
use crate::parser::str_field;
use serde_json::Value;

/// One named MCP server entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpServerEntry {
    pub name: String,
    pub description: String,
}

/// Parse the server entries of an MCP configuration file, sorted by name.
///
/// Supports two wrappers:
/// 1. `{"mcpServers": {"name": {...}}}`
/// 2. `{"servers": {"name": {...}}}`
///
/// `mcpServers` wins whenever it is present, even if empty.
///
/// # Errors
/// Returns an error if the content is not valid JSON
pub fn parse_mcp_servers(content: &str) -> ScanResult<Vec<McpServerEntry>> {
    let data: Value = serde_json::from_str(content)?;

    let servers = data
        .get("mcpServers")
        .filter(|v| !v.is_null())
        .or_else(|| data.get("servers").filter(|v| !v.is_null()));

    let Some(map) = servers.and_then(Value::as_object) else {
        return Ok(Vec::new());
    };

    let mut entries: Vec<McpServerEntry> = map
        .iter()
        .map(|(name, server)| McpServerEntry {
            name: name.clone(),
            description: str_field(server, "description").to_string(),
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
