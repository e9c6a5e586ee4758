//! Artifact and plugin records

use crate::types::{ArtifactType, Level, Tool};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// One discovered skill, command, agent or hook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Display name (metadata `name`, else the file or directory name)
    pub name: String,
    /// Tool whose conventions produced this artifact
    pub tool: Tool,
    /// Kind of artifact
    pub artifact_type: ArtifactType,
    /// Level where it was found
    pub level: Level,
    /// Description, possibly empty
    pub description: String,
    /// Path to the defining file
    pub path: PathBuf,
    /// Owning plugin name (plugin level only)
    #[serde(default)]
    pub plugin_name: String,
    /// Source registry of the owning plugin (plugin level only)
    #[serde(default)]
    pub marketplace: String,
    /// Whether the artifact is active
    pub enabled: bool,
    /// Metadata fields not modelled above
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl Artifact {
    /// Build a standalone (non-plugin) artifact, which is always enabled
    pub fn new(
        tool: Tool,
        artifact_type: ArtifactType,
        level: Level,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            tool,
            artifact_type,
            level,
            description: String::new(),
            path: path.into(),
            plugin_name: String::new(),
            marketplace: String::new(),
            enabled: true,
            extra: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: BTreeMap<String, String>) -> Self {
        self.extra = extra;
        self
    }
}

/// One installed plugin (Claude Code plugin, Gemini extension)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Plugin name
    pub name: String,
    /// Tool the plugin belongs to
    pub tool: Tool,
    /// Source registry, empty when unknown
    pub marketplace: String,
    /// Install location
    pub install_path: PathBuf,
    /// Installed version, possibly empty
    pub version: String,
    /// Enabled state
    pub enabled: bool,
    /// Description from the plugin descriptor
    pub description: String,
    /// Author from the plugin descriptor
    pub author: String,
    /// Artifacts shipped by this plugin
    pub items: Vec<Artifact>,
}

impl PluginInfo {
    /// Create a plugin record with no descriptor data and no items yet
    pub fn new(tool: Tool, name: impl Into<String>, install_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            tool,
            marketplace: String::new(),
            install_path: install_path.into(),
            version: String::new(),
            enabled: false,
            description: String::new(),
            author: String::new(),
            items: Vec::new(),
        }
    }

    /// Build an artifact owned by this plugin.
    ///
    /// The artifact inherits the plugin's name, marketplace and enabled state.
    pub fn item(
        &self,
        artifact_type: ArtifactType,
        name: impl Into<String>,
        path: impl Into<PathBuf>,
    ) -> Artifact {
        Artifact {
            name: name.into(),
            tool: self.tool,
            artifact_type,
            level: Level::Plugin,
            description: String::new(),
            path: path.into(),
            plugin_name: self.name.clone(),
            marketplace: self.marketplace.clone(),
            enabled: self.enabled,
            extra: BTreeMap::new(),
        }
    }

    /// `name@marketplace`, or just the name when there is no marketplace
    pub fn key(&self) -> String {
        if self.marketplace.is_empty() {
            self.name.clone()
        } else {
            format!("{}@{}", self.name, self.marketplace)
        }
    }
}
