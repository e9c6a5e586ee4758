//! Scan configuration
//!
//! Everything a scanner would otherwise read from the environment (home
//! directory, OS family, system-wide roots) is captured here so scans can run
//! against synthetic filesystem trees.

use crate::scope::enterprise_dir;
use crate::types::{HostInfo, Tool};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Inputs shared by every per-tool scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Absolute directory treated as the current project
    pub project_dir: PathBuf,
    /// Host the scan runs against
    pub host: HostInfo,
    /// Replacement enterprise roots, keyed by tool
    pub enterprise_overrides: HashMap<Tool, PathBuf>,
}

impl ScanConfig {
    /// Configuration for the current host
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self::with_host(project_dir, HostInfo::current())
    }

    /// Configuration for an explicit host
    pub fn with_host(project_dir: impl AsRef<Path>, host: HostInfo) -> Self {
        Self {
            project_dir: absolutize(project_dir.as_ref()),
            host,
            enterprise_overrides: HashMap::new(),
        }
    }

    /// Use `dir` instead of the platform enterprise root for `tool`
    #[must_use]
    pub fn with_enterprise_dir(mut self, tool: Tool, dir: impl Into<PathBuf>) -> Self {
        self.enterprise_overrides.insert(tool, dir.into());
        self
    }

    /// Home directory of the scanned host
    pub fn home(&self) -> &Path {
        &self.host.home_dir
    }

    /// Enterprise root for `tool`, if the platform has one
    pub fn enterprise_dir(&self, tool: Tool) -> Option<PathBuf> {
        self.enterprise_overrides
            .get(&tool)
            .cloned()
            .or_else(|| enterprise_dir(tool, &self.host.os))
    }
}

/// Make `path` absolute against the current directory and drop `.`/`..`
/// components lexically (symlinks are not resolved)
fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
