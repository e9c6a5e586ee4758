//! Per-tool scanners
//!
//! Each supported assistant has its own directory conventions. A scanner
//! knows where that tool keeps user, project, plugin and enterprise
//! artifacts and normalizes whatever it finds into [`Inventory`] records.

pub mod claude;
pub mod codex;
pub mod copilot;
pub mod gemini;

pub use claude::ClaudeCodeScanner;
pub use codex::CodexScanner;
pub use copilot::CopilotScanner;
pub use gemini::GeminiScanner;

use crate::config::ScanConfig;
use crate::inventory::Inventory;
use crate::types::{Level, Tool};

/// Discovery for one assistant tool
pub trait ToolScanner: Send + Sync {
    /// The tool this scanner covers
    fn tool(&self) -> Tool;

    /// Scan the requested levels. Levels the tool does not support
    /// contribute nothing.
    fn scan(&self, levels: &[Level]) -> Inventory;
}

/// Build the scanner registered for `tool`
pub fn scanner_for(tool: Tool, config: &ScanConfig) -> Box<dyn ToolScanner> {
    match tool {
        Tool::ClaudeCode => Box::new(ClaudeCodeScanner::new(config)),
        Tool::Codex => Box::new(CodexScanner::new(config)),
        Tool::Gemini => Box::new(GeminiScanner::new(config)),
        Tool::Copilot => Box::new(CopilotScanner::new(config)),
    }
}
