//! Claude Code scanner
//!
//! - user: `~/.claude/{skills,commands,agents}`
//! - project: `<project>/.claude/{skills,commands,agents}`
//! - plugin: `~/.claude/plugins/installed_plugins.json` + `~/.claude/settings.json`
//! - enterprise: platform root, both `skills/` and loose skill folders

use crate::artifacts::Artifact;
use crate::config::ScanConfig;
use crate::inventory::Inventory;
use crate::plugins::scan_installed_plugins;
use crate::scope::{find_markdown, find_skills};
use crate::tools::ToolScanner;
use crate::types::{ArtifactType, Level, Tool};
use std::path::{Path, PathBuf};

/// Scanner for Claude Code's `.claude` layout
#[derive(Debug, Clone)]
pub struct ClaudeCodeScanner {
    claude_dir: PathBuf,
    project_dir: PathBuf,
    enterprise_dir: Option<PathBuf>,
}

impl ClaudeCodeScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            claude_dir: config.home().join(".claude"),
            project_dir: config.project_dir.clone(),
            enterprise_dir: config.enterprise_dir(Tool::ClaudeCode),
        }
    }

    fn scan_user(&self) -> Vec<Artifact> {
        scan_claude_dir(&self.claude_dir, Level::User)
    }

    fn scan_project(&self) -> Vec<Artifact> {
        scan_claude_dir(&self.project_dir.join(".claude"), Level::Project)
    }

    fn scan_enterprise(&self) -> Vec<Artifact> {
        let Some(root) = &self.enterprise_dir else {
            return Vec::new();
        };

        find_skills(&root.join("skills"))
            .into_iter()
            .chain(find_skills(root))
            .map(|f| f.into_artifact(Tool::ClaudeCode, ArtifactType::Skill, Level::Enterprise))
            .collect()
    }
}

/// Skills, then commands, then agents of one `.claude` directory
fn scan_claude_dir(claude_dir: &Path, level: Level) -> Vec<Artifact> {
    let skills = find_skills(&claude_dir.join("skills"))
        .into_iter()
        .map(|f| f.into_artifact(Tool::ClaudeCode, ArtifactType::Skill, level));
    let commands = find_markdown(&claude_dir.join("commands"))
        .into_iter()
        .map(|f| f.into_artifact(Tool::ClaudeCode, ArtifactType::Command, level));
    let agents = find_markdown(&claude_dir.join("agents"))
        .into_iter()
        .map(|f| f.into_artifact(Tool::ClaudeCode, ArtifactType::Agent, level));

    skills.chain(commands).chain(agents).collect()
}

impl ToolScanner for ClaudeCodeScanner {
    fn tool(&self) -> Tool {
        Tool::ClaudeCode
    }

    fn scan(&self, levels: &[Level]) -> Inventory {
        let mut inventory = Inventory::default();

        if levels.contains(&Level::User) {
            inventory.artifacts.extend(self.scan_user());
        }
        if levels.contains(&Level::Project) {
            inventory.artifacts.extend(self.scan_project());
        }
        if levels.contains(&Level::Plugin) {
            let plugins_dir = self.claude_dir.join("plugins");
            inventory.push_plugins(scan_installed_plugins(
                Tool::ClaudeCode,
                &plugins_dir.join("installed_plugins.json"),
                &self.claude_dir.join("settings.json"),
            ));
        }
        if levels.contains(&Level::Enterprise) {
            inventory.artifacts.extend(self.scan_enterprise());
        }

        inventory
    }
}
