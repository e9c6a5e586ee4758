//! Installed plugin discovery (Claude Code plugin layout)
//!
//! Plugins are listed in an install index keyed by `name@marketplace`, with
//! their enabled state kept in a separate settings file. Each plugin's
//! install directory may ship commands, agents, skills and hooks.

use crate::artifacts::{Artifact, PluginInfo};
use crate::error::{ScanError, ScanResult};
use crate::fsutil::{is_dir, is_file};
use crate::parser::{parse_enabled_plugins, read_json_file, str_field};
use crate::scope::{find_markdown, find_skills};
use crate::types::{ArtifactType, Tool};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// One entry of the install index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRecord {
    /// Full `name@marketplace` key
    pub key: String,
    pub name: String,
    pub marketplace: String,
    pub install_path: PathBuf,
    pub version: String,
}

/// Split a plugin key at its last `@`.
///
/// A key without `@` (or starting with it) is all name and no marketplace.
pub fn split_plugin_key(key: &str) -> (String, String) {
    match key.rfind('@') {
        Some(idx) if idx > 0 => (key[..idx].to_string(), key[idx + 1..].to_string()),
        _ => (key.to_string(), String::new()),
    }
}

/// Parse `installed_plugins.json`.
///
/// Version 2 and later nest the entries under `plugins`; version 1 (or no
/// version field) uses the top-level object. Only the first install record
/// of each key is used. Entries keep the order of the file.
///
/// # Errors
/// Returns an error if the content is not valid JSON
pub fn parse_install_index(content: &str) -> ScanResult<Vec<InstallRecord>> {
    let data: Value = serde_json::from_str(content)?;

    let version = data.get("version").map_or(1.0, index_version);
    let entries = if version >= 2.0 {
        data.get("plugins").filter(|v| !v.is_null()).unwrap_or(&data)
    } else {
        &data
    };

    let Some(entries) = entries.as_object() else {
        return Ok(Vec::new());
    };

    Ok(entries
        .iter()
        .filter_map(|(key, installs)| {
            let first = installs.as_array()?.first()?;
            let (name, marketplace) = split_plugin_key(key);
            Some(InstallRecord {
                key: key.clone(),
                name,
                marketplace,
                install_path: PathBuf::from(str_field(first, "installPath")),
                version: str_field(first, "version").to_string(),
            })
        })
        .collect())
}

/// Numeric index version; numeric strings such as `"2"` count too
fn index_version(value: &Value) -> f64 {
    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(1.0)
}

/// Descriptor data from `.claude-plugin/plugin.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginManifest {
    pub description: String,
    pub author: String,
}

/// Parse a plugin descriptor.
///
/// `author` may be a plain string or an object with a `name` field.
///
/// # Errors
/// Returns an error if the content is not valid JSON
pub fn parse_plugin_manifest(content: &str) -> ScanResult<PluginManifest> {
    let data: Value = serde_json::from_str(content)?;

    let author = match data.get("author") {
        Some(Value::String(name)) => name.clone(),
        Some(author @ Value::Object(_)) => str_field(author, "name").to_string(),
        _ => String::new(),
    };

    Ok(PluginManifest {
        description: str_field(&data, "description").to_string(),
        author,
    })
}

/// Contents of a plugin's `hooks/hooks.json`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HooksFile {
    /// Description shared by every hook in the file
    pub description: String,
    /// Hook names, sorted
    pub names: Vec<String>,
}

/// Parse a hooks descriptor
///
/// # Errors
/// Returns an error if the content is not valid JSON
pub fn parse_hooks_file(content: &str) -> ScanResult<HooksFile> {
    let data: Value = serde_json::from_str(content)?;
    Ok(HooksFile::from_value(&data))
}

impl HooksFile {
    fn from_value(data: &Value) -> Self {
        let mut names: Vec<String> = data
            .get("hooks")
            .and_then(Value::as_object)
            .map(|hooks| hooks.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();

        Self {
            description: str_field(data, "description").to_string(),
            names,
        }
    }
}

/// Scan installed plugins listed in `index_path`.
///
/// Missing or malformed index ⇒ no plugins. Missing or malformed settings ⇒
/// every plugin disabled.
pub fn scan_installed_plugins(
    tool: Tool,
    index_path: &Path,
    settings_path: &Path,
) -> Vec<PluginInfo> {
    let records = match read_install_index(index_path) {
        Ok(records) => records,
        Err(ScanError::NotFound(path)) => {
            tracing::debug!(path = %path.display(), "no plugin index");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(
                path = %index_path.display(),
                error = %e,
                "skipping unreadable plugin index"
            );
            return Vec::new();
        }
    };

    let enabled_map = read_enabled_state(settings_path);

    records
        .into_iter()
        .map(|record| {
            let enabled = enabled_map.get(&record.key).copied().unwrap_or(false);
            let manifest = read_manifest(&record.install_path);

            let mut plugin = PluginInfo::new(tool, record.name, record.install_path);
            plugin.marketplace = record.marketplace;
            plugin.version = record.version;
            plugin.enabled = enabled;
            plugin.description = manifest.description;
            plugin.author = manifest.author;
            plugin.items = scan_plugin_contents(&plugin);
            plugin
        })
        .collect()
}

fn read_install_index(path: &Path) -> ScanResult<Vec<InstallRecord>> {
    if !is_file(path) {
        return Err(ScanError::NotFound(path.to_path_buf()));
    }
    parse_install_index(&fs::read_to_string(path)?)
}

/// Read the `enabledPlugins` map, empty when the settings file is absent or broken
fn read_enabled_state(settings_path: &Path) -> HashMap<String, bool> {
    if !is_file(settings_path) {
        return HashMap::new();
    }

    match fs::read_to_string(settings_path)
        .map_err(ScanError::from)
        .and_then(|content| parse_enabled_plugins(&content))
    {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(
                path = %settings_path.display(),
                error = %e,
                "ignoring unreadable settings"
            );
            HashMap::new()
        }
    }
}

fn read_manifest(install_path: &Path) -> PluginManifest {
    let path = install_path.join(".claude-plugin").join("plugin.json");
    if !is_file(&path) {
        return PluginManifest::default();
    }

    match fs::read_to_string(&path)
        .map_err(ScanError::from)
        .and_then(|content| parse_plugin_manifest(&content))
    {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "ignoring unreadable plugin descriptor"
            );
            PluginManifest::default()
        }
    }
}

/// Collect a plugin's items: commands, then agents, then skills, then hooks
pub fn scan_plugin_contents(plugin: &PluginInfo) -> Vec<Artifact> {
    let root = &plugin.install_path;
    let mut items = Vec::new();

    items.extend(
        find_markdown(&root.join("commands"))
            .into_iter()
            .map(|f| f.into_plugin_item(plugin, ArtifactType::Command)),
    );
    items.extend(
        find_markdown(&root.join("agents"))
            .into_iter()
            .map(|f| f.into_plugin_item(plugin, ArtifactType::Agent)),
    );
    items.extend(
        find_skills(&root.join("skills"))
            .into_iter()
            .map(|f| f.into_plugin_item(plugin, ArtifactType::Skill)),
    );
    items.extend(scan_plugin_hooks(plugin));

    items
}

/// One hook artifact per entry of `hooks/hooks.json`
fn scan_plugin_hooks(plugin: &PluginInfo) -> Vec<Artifact> {
    let hooks_dir = plugin.install_path.join("hooks");
    if !is_dir(&hooks_dir) {
        return Vec::new();
    }

    let hooks_path = hooks_dir.join("hooks.json");
    let hooks = match read_json_file(&hooks_path) {
        Ok(data) => HooksFile::from_value(&data),
        Err(ScanError::NotFound(_)) => return Vec::new(),
        Err(e) => {
            tracing::warn!(
                path = %hooks_path.display(),
                error = %e,
                "skipping unreadable hooks file"
            );
            return Vec::new();
        }
    };

    hooks
        .names
        .into_iter()
        .map(|name| {
            plugin
                .item(ArtifactType::Hook, name, hooks_path.clone())
                .with_description(hooks.description.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Level;
    use tempfile::TempDir;

    #[test]
    fn test_split_plugin_key() {
        assert_eq!(
            split_plugin_key("review@official"),
            ("review".to_string(), "official".to_string())
        );
        assert_eq!(
            split_plugin_key("scoped@pkg@market"),
            ("scoped@pkg".to_string(), "market".to_string())
        );
        assert_eq!(split_plugin_key("bare"), ("bare".to_string(), String::new()));
        assert_eq!(split_plugin_key("@lead"), ("@lead".to_string(), String::new()));
    }

    #[test]
    fn test_parse_install_index_v1() {
        let content =
            r#"{"a@market": [{"installPath": "/p/a", "version": "1.0"}, {"installPath": "/old"}]}"#;
        let records = parse_install_index(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "a");
        assert_eq!(records[0].marketplace, "market");
        assert_eq!(records[0].install_path, PathBuf::from("/p/a"));
        assert_eq!(records[0].version, "1.0");
    }

    #[test]
    fn test_parse_install_index_v2_keeps_file_order() {
        let content = r#"{
            "version": 2,
            "plugins": {
                "zz@m": [{"installPath": "/p/zz"}],
                "aa@m": [{"installPath": "/p/aa", "version": "2.1.0"}],
                "empty@m": []
            }
        }"#;
        let records = parse_install_index(content).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["zz", "aa"]);
        assert_eq!(records[0].version, "");
    }

    #[test]
    fn test_parse_install_index_v1_ignores_nested_plugins_key() {
        let content = r#"{"plugins": {"x@m": [{"installPath": "/p/x"}]}}"#;
        assert!(parse_install_index(content).unwrap().is_empty());
    }

    #[test]
    fn test_parse_install_index_string_version() {
        let content = r#"{"version": "2", "plugins": {"s@m": [{"installPath": "/p/s"}]}}"#;
        let records = parse_install_index(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "s@m");

        let unparsable = r#"{"version": "two", "t@m": [{"installPath": "/p/t"}]}"#;
        assert_eq!(parse_install_index(unparsable).unwrap()[0].key, "t@m");
    }

    #[test]
    fn test_parse_plugin_manifest_author_shapes() {
        let string_author =
            parse_plugin_manifest(r#"{"description": "d", "author": "Ann"}"#).unwrap();
        assert_eq!(string_author.author, "Ann");
        assert_eq!(string_author.description, "d");

        let object_author =
            parse_plugin_manifest(r#"{"author": {"name": "Bo", "email": "b@x"}}"#).unwrap();
        assert_eq!(object_author.author, "Bo");

        let odd_author = parse_plugin_manifest(r#"{"author": 42}"#).unwrap();
        assert_eq!(odd_author.author, "");
    }

    #[test]
    fn test_parse_hooks_file_sorts_names() {
        let content = r#"{
            "description": "guards",
            "hooks": {"Stop": [], "PreToolUse": [], "Notification": []}
        }"#;
        let hooks = parse_hooks_file(content).unwrap();
        assert_eq!(hooks.description, "guards");
        assert_eq!(hooks.names, vec!["Notification", "PreToolUse", "Stop"]);
    }

    #[test]
    fn test_scan_installed_plugins_disabled_by_default() {
        let temp = TempDir::new().unwrap();
        let install = temp.path().join("install");
        fs::create_dir_all(install.join("commands")).unwrap();
        fs::write(install.join("commands").join("go.md"), "---\ndescription: go\n---\n").unwrap();

        let index = temp.path().join("installed_plugins.json");
        fs::write(
            &index,
            format!(
                r#"{{"demo@market": [{{"installPath": {}, "version": "0.1"}}]}}"#,
                serde_json::to_string(&install).unwrap()
            ),
        )
        .unwrap();

        let plugins = scan_installed_plugins(
            Tool::ClaudeCode,
            &index,
            &temp.path().join("missing-settings.json"),
        );
        assert_eq!(plugins.len(), 1);
        let plugin = &plugins[0];
        assert!(!plugin.enabled);
        assert_eq!(plugin.items.len(), 1);
        assert_eq!(plugin.items[0].level, Level::Plugin);
        assert!(!plugin.items[0].enabled);
        assert_eq!(plugin.items[0].name, "go");
    }

    #[test]
    fn test_malformed_hooks_contribute_nothing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("hooks")).unwrap();
        fs::write(temp.path().join("hooks").join("hooks.json"), "{ nope").unwrap();

        let plugin = PluginInfo::new(Tool::ClaudeCode, "p", temp.path());
        assert!(scan_plugin_contents(&plugin).is_empty());
    }

    #[test]
    fn test_plugin_contents_order() {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("commands")).unwrap();
        fs::write(root.join("commands").join("b.md"), "").unwrap();
        fs::write(root.join("commands").join("a.md"), "").unwrap();
        fs::create_dir_all(root.join("agents")).unwrap();
        fs::write(root.join("agents").join("z.md"), "").unwrap();
        fs::create_dir_all(root.join("skills").join("s")).unwrap();
        fs::write(root.join("skills").join("s").join("SKILL.md"), "").unwrap();
        fs::create_dir_all(root.join("hooks")).unwrap();
        fs::write(
            root.join("hooks").join("hooks.json"),
            r#"{"hooks": {"B": [], "A": []}}"#,
        )
        .unwrap();

        let plugin = PluginInfo::new(Tool::ClaudeCode, "p", root);
        let items: Vec<(String, ArtifactType)> = scan_plugin_contents(&plugin)
            .into_iter()
            .map(|item| (item.name, item.artifact_type))
            .collect();

        let expected = [
            ("a", ArtifactType::Command),
            ("b", ArtifactType::Command),
            ("z", ArtifactType::Agent),
            ("s", ArtifactType::Skill),
            ("A", ArtifactType::Hook),
            ("B", ArtifactType::Hook),
        ]
        .map(|(name, kind)| (name.to_string(), kind));
        assert_eq!(items, expected);
    }
}
