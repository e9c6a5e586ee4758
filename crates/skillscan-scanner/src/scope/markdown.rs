//! Skill directories and markdown command/agent directories

use crate::artifacts::{Artifact, PluginInfo};
use crate::fsutil::{is_dir, is_file, read_file_safe, sorted_dir};
use crate::parser::{parse_frontmatter, split_metadata, Metadata};
use crate::types::{ArtifactType, Level, Tool};
use std::path::{Path, PathBuf};

/// Fixed name of the metadata file inside a skill directory
pub const SKILL_FILE: &str = "SKILL.md";

/// A metadata-bearing file discovered on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    /// Path to the defining file
    pub path: PathBuf,
    /// Directory name (skills) or file name (markdown files) it was found under
    pub source_name: String,
    /// Parsed header, with the name already defaulted
    pub meta: Metadata,
}

impl Found {
    fn read(path: PathBuf, source_name: String, fallback_name: &str) -> Self {
        let meta = split_metadata(parse_frontmatter(&read_file_safe(&path)), fallback_name);
        Self {
            path,
            source_name,
            meta,
        }
    }

    /// Convert into a standalone artifact
    pub fn into_artifact(self, tool: Tool, artifact_type: ArtifactType, level: Level) -> Artifact {
        Artifact::new(tool, artifact_type, level, self.meta.name, self.path)
            .with_description(self.meta.description)
            .with_extra(self.meta.extra)
    }

    /// Convert into an artifact owned by `plugin`
    pub fn into_plugin_item(self, plugin: &PluginInfo, artifact_type: ArtifactType) -> Artifact {
        plugin
            .item(artifact_type, self.meta.name, self.path)
            .with_description(self.meta.description)
            .with_extra(self.meta.extra)
    }
}

/// Scan a directory for skill folders (each containing SKILL.md).
///
/// Children are visited in sorted order; folders without a SKILL.md file
/// are skipped.
pub fn find_skills(dir: &Path) -> Vec<Found> {
    if !is_dir(dir) {
        return Vec::new();
    }

    let mut skills = Vec::new();
    for child in sorted_dir(dir) {
        let child_path = dir.join(&child);
        if !is_dir(&child_path) {
            continue;
        }

        let skill_file = child_path.join(SKILL_FILE);
        if !is_file(&skill_file) {
            continue;
        }

        skills.push(Found::read(skill_file, child.clone(), &child));
    }

    tracing::debug!(dir = %dir.display(), count = skills.len(), "scanned skills directory");
    skills
}

/// Scan a directory for `.md` files (commands, agents).
///
/// The name defaults to the file name without its `.md` extension.
pub fn find_markdown(dir: &Path) -> Vec<Found> {
    if !is_dir(dir) {
        return Vec::new();
    }

    let mut found = Vec::new();
    for file in sorted_dir(dir) {
        let Some(stem) = file.strip_suffix(".md") else {
            continue;
        };
        let path = dir.join(&file);
        if !is_file(&path) {
            continue;
        }

        let stem = stem.to_string();
        found.push(Found::read(path, file, &stem));
    }

    tracing::debug!(dir = %dir.display(), count = found.len(), "scanned markdown directory");
    found
}
