//! Enterprise (IT-deployed) configuration roots
//!
//! Each tool reads system-wide skills from one fixed path per OS family.
//! Unknown platforms have no enterprise root at all.

use crate::types::Tool;
use std::path::PathBuf;

/// System-wide root consulted for `tool` on `os` (`std::env::consts::OS` naming)
pub fn enterprise_dir(tool: Tool, os: &str) -> Option<PathBuf> {
    let path = match (tool, os) {
        (Tool::ClaudeCode, "macos" | "darwin") => "/Library/Application Support/ClaudeCode",
        (Tool::ClaudeCode, "linux") => "/etc/claude-code",
        (Tool::ClaudeCode, "windows" | "win32") => "C:\\ProgramData\\ClaudeCode",
        (
            Tool::Codex,
            "linux" | "macos" | "darwin" | "freebsd" | "openbsd" | "netbsd" | "dragonfly"
            | "solaris" | "illumos",
        ) => "/etc/codex/skills",
        _ => return None,
    };
    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claude_enterprise_dirs() {
        assert_eq!(
            enterprise_dir(Tool::ClaudeCode, "linux"),
            Some(PathBuf::from("/etc/claude-code"))
        );
        assert_eq!(
            enterprise_dir(Tool::ClaudeCode, "macos"),
            Some(PathBuf::from("/Library/Application Support/ClaudeCode"))
        );
        assert_eq!(
            enterprise_dir(Tool::ClaudeCode, "windows"),
            Some(PathBuf::from("C:\\ProgramData\\ClaudeCode"))
        );
        assert_eq!(enterprise_dir(Tool::ClaudeCode, "haiku"), None);
    }

    #[test]
    fn test_tools_without_enterprise_level() {
        assert_eq!(enterprise_dir(Tool::Gemini, "linux"), None);
        assert_eq!(enterprise_dir(Tool::Copilot, "macos"), None);
        assert_eq!(enterprise_dir(Tool::Codex, "windows"), None);
        assert_eq!(
            enterprise_dir(Tool::Codex, "linux"),
            Some(PathBuf::from("/etc/codex/skills"))
        );
    }
}
