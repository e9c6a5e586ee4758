//! Shared taxonomy for the skill scanner

use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Supported AI coding assistant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Claude Code (~/.claude/)
    ClaudeCode,
    /// OpenAI Codex CLI (~/.codex/)
    Codex,
    /// Gemini CLI (~/.gemini/)
    Gemini,
    /// GitHub Copilot CLI (~/.copilot/)
    Copilot,
}

impl Tool {
    /// Every known tool, in scan order
    pub const ALL: [Tool; 4] = [Tool::ClaudeCode, Tool::Codex, Tool::Gemini, Tool::Copilot];

    /// Stable identifier used on the command line and in JSON
    pub fn as_str(self) -> &'static str {
        match self {
            Tool::ClaudeCode => "claude-code",
            Tool::Codex => "codex",
            Tool::Gemini => "gemini",
            Tool::Copilot => "copilot",
        }
    }

    /// Human readable product name
    pub fn label(self) -> &'static str {
        match self {
            Tool::ClaudeCode => "Claude Code",
            Tool::Codex => "OpenAI Codex CLI",
            Tool::Gemini => "Gemini CLI",
            Tool::Copilot => "GitHub Copilot CLI",
        }
    }

    /// Parse a comma separated filter, dropping unknown tokens.
    ///
    /// Returns `None` when nothing usable remains, meaning "all tools".
    pub fn parse_list(input: &str) -> Option<Vec<Tool>> {
        parse_tokens(input)
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "claude-code" | "claude" => Ok(Tool::ClaudeCode),
            "codex" => Ok(Tool::Codex),
            "gemini" => Ok(Tool::Gemini),
            "copilot" => Ok(Tool::Copilot),
            _ => Err(format!("Invalid tool: {s}")),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authority level where an artifact was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Per-user configuration under the home directory
    User,
    /// Configuration checked into the scanned project or repository
    Project,
    /// Shipped inside an installed plugin or extension
    Plugin,
    /// System-wide, IT-deployed configuration
    Enterprise,
}

impl Level {
    /// Every level, in scan order
    pub const ALL: [Level; 4] = [Level::User, Level::Project, Level::Plugin, Level::Enterprise];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::User => "user",
            Level::Project => "project",
            Level::Plugin => "plugin",
            Level::Enterprise => "enterprise",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::User => "User",
            Level::Project => "Project",
            Level::Plugin => "Plugin",
            Level::Enterprise => "Enterprise",
        }
    }

    /// Parse a comma separated filter, dropping unknown tokens.
    ///
    /// Returns `None` when nothing usable remains, meaning "all levels".
    pub fn parse_list(input: &str) -> Option<Vec<Level>> {
        parse_tokens(input)
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Level::User),
            "project" => Ok(Level::Project),
            "plugin" => Ok(Level::Plugin),
            "enterprise" => Ok(Level::Enterprise),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactType {
    Skill,
    Command,
    Agent,
    Hook,
}

impl ArtifactType {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactType::Skill => "skill",
            ArtifactType::Command => "command",
            ArtifactType::Agent => "agent",
            ArtifactType::Hook => "hook",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_tokens<T: FromStr>(input: &str) -> Option<Vec<T>> {
    let parsed: Vec<T> = input
        .split(',')
        .filter_map(|token| token.parse().ok())
        .collect();
    if parsed.is_empty() {
        None
    } else {
        Some(parsed)
    }
}

/// Host system information the scanners resolve paths against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostInfo {
    /// Operating system family (`std::env::consts::OS` naming)
    pub os: String,
    /// Home directory path
    pub home_dir: PathBuf,
}

impl HostInfo {
    /// Describe an arbitrary host, e.g. a synthetic root in tests
    pub fn new(os: impl Into<String>, home_dir: impl Into<PathBuf>) -> Self {
        Self {
            os: os.into(),
            home_dir: home_dir.into(),
        }
    }

    /// Create `HostInfo` for the current system
    #[must_use]
    pub fn current() -> Self {
        Self::try_current().unwrap_or_else(|_| Self {
            os: std::env::consts::OS.to_string(),
            home_dir: PathBuf::from(if cfg!(windows) { "C:\\" } else { "/" }),
        })
    }

    /// Create `HostInfo` for the current system
    ///
    /// # Errors
    /// Returns [`ScanError::HomeNotFound`] when no home directory can be resolved
    pub fn try_current() -> ScanResult<Self> {
        let home_dir = dirs::home_dir().ok_or(ScanError::HomeNotFound)?;
        Ok(Self {
            os: std::env::consts::OS.to_string(),
            home_dir,
        })
    }
}
