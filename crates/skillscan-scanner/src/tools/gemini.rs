//! Gemini CLI scanner
//!
//! Gemini has no plugin marketplace; its extensions (one folder per
//! extension with a `gemini-extension.json` descriptor) are reported as
//! plugins instead, with their custom TOML commands as items.

use crate::artifacts::{Artifact, PluginInfo};
use crate::config::ScanConfig;
use crate::error::{ScanError, ScanResult};
use crate::fsutil::{is_dir, is_file, sorted_dir};
use crate::inventory::Inventory;
use crate::parser::{read_json_file, str_field};
use crate::scope::find_skills;
use crate::tools::ToolScanner;
use crate::types::{ArtifactType, Level, Tool};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const EXTENSION_FILE: &str = "gemini-extension.json";

/// Scanner for `~/.gemini` and `<project>/.gemini`
#[derive(Debug, Clone)]
pub struct GeminiScanner {
    user_dir: PathBuf,
    project_dir: PathBuf,
}

impl GeminiScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            user_dir: config.home().join(".gemini"),
            project_dir: config.project_dir.join(".gemini"),
        }
    }

    /// Extensions installed for the user, then those vendored in the project
    fn scan_extensions(&self) -> Vec<PluginInfo> {
        [&self.user_dir, &self.project_dir]
            .into_iter()
            .flat_map(|dir| scan_extension_dir(&dir.join("extensions")))
            .collect()
    }
}

fn skills_at(dir: &Path, level: Level) -> Vec<Artifact> {
    find_skills(dir)
        .into_iter()
        .map(|f| f.into_artifact(Tool::Gemini, ArtifactType::Skill, level))
        .collect()
}

fn scan_extension_dir(extensions_dir: &Path) -> Vec<PluginInfo> {
    if !is_dir(extensions_dir) {
        return Vec::new();
    }

    let mut plugins = Vec::new();
    for child in sorted_dir(extensions_dir) {
        let extension_path = extensions_dir.join(&child);
        if !is_dir(&extension_path) {
            continue;
        }

        let descriptor_path = extension_path.join(EXTENSION_FILE);
        let descriptor = match read_json_file(&descriptor_path) {
            Ok(data) => data,
            Err(ScanError::NotFound(_)) => continue,
            Err(e) => {
                tracing::warn!(
                    path = %descriptor_path.display(),
                    error = %e,
                    "skipping unreadable extension"
                );
                continue;
            }
        };

        let name = descriptor
            .get("name")
            .and_then(serde_json::Value::as_str)
            .unwrap_or(&child);

        let mut plugin = PluginInfo::new(Tool::Gemini, name, extension_path);
        plugin.version = str_field(&descriptor, "version").to_string();
        plugin.description = str_field(&descriptor, "description").to_string();
        plugin.enabled = true;
        plugin.items = scan_extension_commands(&plugin);
        plugins.push(plugin);
    }
    plugins
}

/// Custom command file (`commands/**/*.toml`)
#[derive(Debug, Default, Deserialize)]
struct CommandFile {
    #[serde(default)]
    description: Option<String>,
}

fn parse_command_file(path: &Path) -> ScanResult<CommandFile> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Commands shipped by an extension, named by their path with `:` separators
/// (`git/commit.toml` is invoked as `/git:commit`)
fn scan_extension_commands(plugin: &PluginInfo) -> Vec<Artifact> {
    let commands_dir = plugin.install_path.join("commands");
    if !is_dir(&commands_dir) {
        return Vec::new();
    }

    WalkDir::new(&commands_dir)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.path().extension().is_some_and(|ext| ext == "toml") && is_file(entry.path())
        })
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(&commands_dir).ok()?;
            let name = relative
                .with_extension("")
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join(":");

            let description = match parse_command_file(entry.path()) {
                Ok(command) => command.description.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        error = %e,
                        "unreadable command file"
                    );
                    String::new()
                }
            };

            Some(
                plugin
                    .item(ArtifactType::Command, name, entry.path())
                    .with_description(description),
            )
        })
        .collect()
}

impl ToolScanner for GeminiScanner {
    fn tool(&self) -> Tool {
        Tool::Gemini
    }

    fn scan(&self, levels: &[Level]) -> Inventory {
        let mut inventory = Inventory::default();

        if levels.contains(&Level::User) {
            inventory
                .artifacts
                .extend(skills_at(&self.user_dir.join("skills"), Level::User));
        }
        if levels.contains(&Level::Project) {
            inventory
                .artifacts
                .extend(skills_at(&self.project_dir.join("skills"), Level::Project));
        }
        if levels.contains(&Level::Plugin) {
            inventory.push_plugins(self.scan_extensions());
        }

        inventory
    }
}
