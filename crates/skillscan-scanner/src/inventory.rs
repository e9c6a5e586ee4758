//! Inventory types for scan results

use crate::artifacts::{Artifact, PluginInfo};
use crate::types::{ArtifactType, Level, Tool};
use serde::{Deserialize, Serialize};

/// Complete inventory from a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Every artifact found, plugin items included
    pub artifacts: Vec<Artifact>,
    /// Installed plugins with their items
    pub plugins: Vec<PluginInfo>,
}

impl Inventory {
    /// Append another inventory, keeping order
    pub fn extend(&mut self, other: Inventory) {
        self.artifacts.extend(other.artifacts);
        self.plugins.extend(other.plugins);
    }

    /// Add plugins, flattening their items into the artifact list
    pub fn push_plugins(&mut self, plugins: Vec<PluginInfo>) {
        for plugin in &plugins {
            self.artifacts.extend(plugin.items.iter().cloned());
        }
        self.plugins.extend(plugins);
    }

    /// Artifacts found at one level
    pub fn by_level(&self, level: Level) -> impl Iterator<Item = &Artifact> {
        self.artifacts.iter().filter(move |a| a.level == level)
    }

    /// The part of this inventory produced by one tool
    pub fn by_tool(&self, tool: Tool) -> Inventory {
        Inventory {
            artifacts: self
                .artifacts
                .iter()
                .filter(|a| a.tool == tool)
                .cloned()
                .collect(),
            plugins: self
                .plugins
                .iter()
                .filter(|p| p.tool == tool)
                .cloned()
                .collect(),
        }
    }

    /// Count artifacts per level and plugins
    pub fn summary(&self) -> Summary {
        let plugin_items: Vec<&Artifact> = self.by_level(Level::Plugin).collect();
        let count_type =
            |t: ArtifactType| plugin_items.iter().filter(|a| a.artifact_type == t).count();

        Summary {
            user: self.by_level(Level::User).count(),
            project: self.by_level(Level::Project).count(),
            enterprise: self.by_level(Level::Enterprise).count(),
            plugin_count: self.plugins.len(),
            enabled_plugins: self.plugins.iter().filter(|p| p.enabled).count(),
            plugin_items: plugin_items.len(),
            plugin_commands: count_type(ArtifactType::Command),
            plugin_agents: count_type(ArtifactType::Agent),
            plugin_skills: count_type(ArtifactType::Skill),
            plugin_hooks: count_type(ArtifactType::Hook),
            total: self.artifacts.len(),
        }
    }
}

/// Aggregate counts over an inventory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub user: usize,
    pub project: usize,
    pub enterprise: usize,
    pub plugin_count: usize,
    pub enabled_plugins: usize,
    pub plugin_items: usize,
    pub plugin_commands: usize,
    pub plugin_agents: usize,
    pub plugin_skills: usize,
    pub plugin_hooks: usize,
    pub total: usize,
}
