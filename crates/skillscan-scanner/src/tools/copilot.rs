//! GitHub Copilot CLI scanner
//!
//! Copilot has no skill folders: its user level is the MCP server list in
//! `~/.copilot/mcp-config.json` and its project level is the single
//! `.github/copilot-instructions.md` file.

use crate::artifacts::Artifact;
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::fsutil::{is_file, read_file_safe};
use crate::inventory::Inventory;
use crate::parser::parse_mcp_servers;
use crate::tools::ToolScanner;
use crate::types::{ArtifactType, Level, Tool};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

const INSTRUCTIONS_NAME: &str = "copilot-instructions";
const INSTRUCTIONS_FALLBACK: &str = "Copilot project instructions";
const DESCRIPTION_LIMIT: usize = 100;

/// Scanner for Copilot's MCP config and project instructions
#[derive(Debug, Clone)]
pub struct CopilotScanner {
    mcp_config: PathBuf,
    instructions: PathBuf,
}

impl CopilotScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            mcp_config: config.home().join(".copilot").join("mcp-config.json"),
            instructions: config
                .project_dir
                .join(".github")
                .join("copilot-instructions.md"),
        }
    }

    /// One command per configured MCP server
    fn scan_user(&self) -> Vec<Artifact> {
        if !is_file(&self.mcp_config) {
            return Vec::new();
        }

        let servers = match fs::read_to_string(&self.mcp_config)
            .map_err(ScanError::from)
            .and_then(|content| parse_mcp_servers(&content))
        {
            Ok(servers) => servers,
            Err(e) => {
                tracing::warn!(
                    path = %self.mcp_config.display(),
                    error = %e,
                    "skipping unreadable MCP config"
                );
                return Vec::new();
            }
        };

        servers
            .into_iter()
            .map(|server| {
                let extra = BTreeMap::from([("source".to_string(), "mcp-config".to_string())]);
                Artifact::new(
                    Tool::Copilot,
                    ArtifactType::Command,
                    Level::User,
                    server.name,
                    self.mcp_config.clone(),
                )
                .with_description(server.description)
                .with_extra(extra)
            })
            .collect()
    }

    fn scan_project(&self) -> Vec<Artifact> {
        if !is_file(&self.instructions) {
            return Vec::new();
        }

        let description = instructions_description(&read_file_safe(&self.instructions));
        vec![Artifact::new(
            Tool::Copilot,
            ArtifactType::Skill,
            Level::Project,
            INSTRUCTIONS_NAME,
            self.instructions.clone(),
        )
        .with_description(description)]
    }
}

/// Describe an instructions file by its first non-blank line.
///
/// A markdown heading loses its `#` markers; plain text is cut to 100 chars.
fn instructions_description(text: &str) -> String {
    let first = text
        .split('\n')
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("");

    let description = if first.starts_with('#') {
        first.trim_start_matches('#').trim_start().to_string()
    } else {
        first.chars().take(DESCRIPTION_LIMIT).collect()
    };

    if description.is_empty() {
        INSTRUCTIONS_FALLBACK.to_string()
    } else {
        description
    }
}

impl ToolScanner for CopilotScanner {
    fn tool(&self) -> Tool {
        Tool::Copilot
    }

    fn scan(&self, levels: &[Level]) -> Inventory {
        let mut inventory = Inventory::default();

        if levels.contains(&Level::User) {
            inventory.artifacts.extend(self.scan_user());
        }
        if levels.contains(&Level::Project) {
            inventory.artifacts.extend(self.scan_project());
        }

        inventory
    }
}
