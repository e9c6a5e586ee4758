//! Multi-tool scanner

use crate::config::ScanConfig;
use crate::inventory::Inventory;
use crate::tools::scanner_for;
use crate::types::{Level, Tool};
use rayon::prelude::*;
use std::path::Path;

/// Drives the per-tool scanners and merges their results
#[derive(Debug, Clone)]
pub struct Scanner {
    config: ScanConfig,
    parallel: bool,
}

impl Scanner {
    /// Scanner rooted at `project_dir` on the current host
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self::with_config(ScanConfig::new(project_dir))
    }

    /// Scanner with an explicit configuration
    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            parallel: false,
        }
    }

    /// Run the per-tool scanners on the rayon pool.
    ///
    /// Output order is the same as a sequential scan.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configuration every tool scanner is built from
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan the selected tools at the selected levels.
    ///
    /// `None` selects every tool / every level. Tools always run in
    /// [`Tool::ALL`] order regardless of how the filter is ordered.
    pub fn scan(&self, tools: Option<&[Tool]>, levels: Option<&[Level]>) -> Inventory {
        let levels = levels.unwrap_or(&Level::ALL[..]);
        let selected: Vec<Tool> = Tool::ALL
            .into_iter()
            .filter(|tool| tools.map_or(true, |wanted| wanted.contains(tool)))
            .collect();

        tracing::debug!(
            project = %self.config.project_dir.display(),
            tools = ?selected,
            levels = ?levels,
            "starting scan"
        );

        let partials: Vec<Inventory> = if self.parallel {
            selected
                .par_iter()
                .map(|tool| self.scan_tool(*tool, levels))
                .collect()
        } else {
            selected
                .iter()
                .map(|tool| self.scan_tool(*tool, levels))
                .collect()
        };

        let mut inventory = Inventory::default();
        for partial in partials {
            inventory.extend(partial);
        }
        inventory
    }

    /// Scan a single tool
    pub fn scan_tool(&self, tool: Tool, levels: &[Level]) -> Inventory {
        let scanner = scanner_for(tool, &self.config);
        let inventory = scanner.scan(levels);
        tracing::debug!(
            tool = %scanner.tool(),
            artifacts = inventory.artifacts.len(),
            plugins = inventory.plugins.len(),
            "tool scanned"
        );
        inventory
    }
}
