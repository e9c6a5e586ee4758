//! OpenAI Codex CLI scanner
//!
//! Codex versions project skills at repository scope, so the project level
//! is resolved from the enclosing git repository rather than the scan root.

use crate::artifacts::Artifact;
use crate::config::ScanConfig;
use crate::inventory::Inventory;
use crate::scope::{find_repo_root, find_skills};
use crate::tools::ToolScanner;
use crate::types::{ArtifactType, Level, Tool};
use std::path::{Path, PathBuf};

/// Directory holding the skills bundled with Codex itself
const SYSTEM_DIR: &str = ".system";

/// Scanner for `~/.codex/skills` and `<repo>/.agents/skills`
#[derive(Debug, Clone)]
pub struct CodexScanner {
    skills_dir: PathBuf,
    project_dir: PathBuf,
    enterprise_dir: Option<PathBuf>,
}

impl CodexScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            skills_dir: config.home().join(".codex").join("skills"),
            project_dir: config.project_dir.clone(),
            enterprise_dir: config.enterprise_dir(Tool::Codex),
        }
    }

    /// User skills, then bundled `.system` skills tagged `bundled = "true"`
    fn scan_user(&self) -> Vec<Artifact> {
        let mut items: Vec<Artifact> = find_skills(&self.skills_dir)
            .into_iter()
            .filter(|f| f.source_name != SYSTEM_DIR)
            .map(|f| f.into_artifact(Tool::Codex, ArtifactType::Skill, Level::User))
            .collect();

        items.extend(
            find_skills(&self.skills_dir.join(SYSTEM_DIR))
                .into_iter()
                .map(|f| {
                    let mut skill = f.into_artifact(Tool::Codex, ArtifactType::Skill, Level::User);
                    skill.extra.insert("bundled".to_string(), "true".to_string());
                    skill
                }),
        );

        items
    }

    fn scan_project(&self) -> Vec<Artifact> {
        let Some(repo_root) = find_repo_root(&self.project_dir) else {
            tracing::debug!(
                dir = %self.project_dir.display(),
                "no git repository above project dir"
            );
            return Vec::new();
        };
        skills_at(&repo_root.join(".agents").join("skills"), Level::Project)
    }

    fn scan_enterprise(&self) -> Vec<Artifact> {
        self.enterprise_dir
            .as_deref()
            .map(|dir| skills_at(dir, Level::Enterprise))
            .unwrap_or_default()
    }
}

fn skills_at(dir: &Path, level: Level) -> Vec<Artifact> {
    find_skills(dir)
        .into_iter()
        .map(|f| f.into_artifact(Tool::Codex, ArtifactType::Skill, level))
        .collect()
}

impl ToolScanner for CodexScanner {
    fn tool(&self) -> Tool {
        Tool::Codex
    }

    fn scan(&self, levels: &[Level]) -> Inventory {
        let mut inventory = Inventory::default();

        if levels.contains(&Level::User) {
            inventory.artifacts.extend(self.scan_user());
        }
        if levels.contains(&Level::Project) {
            inventory.artifacts.extend(self.scan_project());
        }
        if levels.contains(&Level::Enterprise) {
            inventory.artifacts.extend(self.scan_enterprise());
        }

        inventory
    }
}
