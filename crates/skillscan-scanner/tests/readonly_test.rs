//! Non-destructive guarantee tests
//!
//! The scanner must never create, modify or delete anything in the trees it
//! inspects, including files it fails to parse.

use sha2::{Digest, Sha256};
use skillscan_scanner::{HostInfo, ScanConfig, Scanner, Tool};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

/// Compute SHA256 hash of a file
fn hash_file(path: &Path) -> Option<String> {
    let content = fs::read(path).ok()?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Some(hex::encode(hasher.finalize()))
}

/// Relative path of every entry, with a content hash for files
fn snapshot_directory(path: &Path) -> BTreeMap<String, String> {
    let mut snapshot = BTreeMap::new();

    for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
        let relative_path = entry
            .path()
            .strip_prefix(path)
            .unwrap()
            .to_string_lossy()
            .to_string();
        if entry.file_type().is_file() {
            if let Some(hash) = hash_file(entry.path()) {
                snapshot.insert(relative_path, hash);
            }
        } else if entry.file_type().is_dir() {
            snapshot.insert(relative_path, "<dir>".to_string());
        }
    }

    snapshot
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Home, project and enterprise trees for every tool, including broken files
fn create_readonly_test_fixture() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let home = temp_dir.path().join("home");
    let project = temp_dir.path().join("project");
    let enterprise = temp_dir.path().join("enterprise");

    write(
        &home.join(".claude/skills/my-skill/SKILL.md"),
        "---\nname: my-skill\ndescription: Test skill\n---\n\nInstructions here.\n",
    );
    write(
        &home.join(".claude/commands/my-command.md"),
        "---\ndescription: Test command\n---\n\nDo $ARGUMENTS\n",
    );
    write(
        &home.join(".claude/agents/my-agent.md"),
        "---\nname: my-agent\ntools:\n  - Read\n---\n",
    );
    write(&home.join(".claude/settings.json"), "{ broken json");

    let install = home.join(".claude/plugins/cache/p");
    write(&install.join(".claude-plugin/plugin.json"), "[]");
    write(&install.join("hooks/hooks.json"), "not json either");
    write(&install.join("skills/inner/SKILL.md"), "no header");
    write(
        &home.join(".claude/plugins/installed_plugins.json"),
        &serde_json::json!({"p@m": [{"installPath": install}]}).to_string(),
    );

    write(&home.join(".codex/skills/.system/bundled/SKILL.md"), "---\n---\n");
    write(
        &home.join(".gemini/extensions/ext/gemini-extension.json"),
        r#"{"name": "ext"}"#,
    );
    write(&home.join(".gemini/extensions/ext/commands/bad.toml"), "= =");
    write(&home.join(".copilot/mcp-config.json"), r#"{"servers": {"s": {}}}"#);

    write(&project.join(".github/copilot-instructions.md"), "# Rules\n");
    write(&project.join(".gemini/skills/g/SKILL.md"), "---\nname: g\n---\n");
    write(&project.join("README.md"), "# Test Project");
    fs::create_dir_all(project.join(".git")).unwrap();

    write(&enterprise.join("skills/policy/SKILL.md"), "---\nname: policy\n---\n");

    temp_dir
}

fn scanner_for_fixture(fixture: &TempDir) -> Scanner {
    let root = fixture.path();
    let host = HostInfo::new("linux", root.join("home"));
    let config = ScanConfig::with_host(root.join("project"), host)
        .with_enterprise_dir(Tool::ClaudeCode, root.join("enterprise"))
        .with_enterprise_dir(Tool::Codex, root.join("enterprise"));
    Scanner::with_config(config)
}

fn assert_unchanged(before: &BTreeMap<String, String>, after: &BTreeMap<String, String>) {
    assert_eq!(
        before.len(),
        after.len(),
        "Number of files and directories should not change"
    );
    for (path, before_hash) in before {
        assert_eq!(
            Some(before_hash),
            after.get(path),
            "Entry {path} should not be modified"
        );
    }
}

#[test]
fn test_scanner_is_readonly_full_scan() {
    let fixture = create_readonly_test_fixture();
    let before_snapshot = snapshot_directory(fixture.path());

    let inventory = scanner_for_fixture(&fixture).scan(None, None);
    assert!(!inventory.artifacts.is_empty(), "Fixture should yield artifacts");

    assert_unchanged(&before_snapshot, &snapshot_directory(fixture.path()));
}

#[test]
fn test_scanner_is_readonly_parallel_scans() {
    let fixture = create_readonly_test_fixture();
    let before_snapshot = snapshot_directory(fixture.path());

    let scanner = scanner_for_fixture(&fixture).with_parallel(true);
    for _ in 0..5 {
        scanner.scan(None, None);
    }

    assert_unchanged(&before_snapshot, &snapshot_directory(fixture.path()));
}

#[test]
fn test_scanner_does_not_create_missing_roots() {
    let fixture = TempDir::new().unwrap();
    let before_snapshot = snapshot_directory(fixture.path());

    let inventory = scanner_for_fixture(&fixture).scan(None, None);
    assert!(inventory.artifacts.is_empty());

    assert_unchanged(&before_snapshot, &snapshot_directory(fixture.path()));
}

#[cfg(unix)]
#[test]
fn test_scanner_preserves_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = create_readonly_test_fixture();

    let modes = |root: &Path| -> BTreeMap<String, u32> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let relative = e.path().strip_prefix(root).unwrap().to_string_lossy().to_string();
                (relative, fs::metadata(e.path()).unwrap().permissions().mode())
            })
            .collect()
    };

    let before = modes(fixture.path());
    scanner_for_fixture(&fixture).scan(None, None);
    assert_eq!(before, modes(fixture.path()));
}

#[test]
fn test_scanner_preserves_timestamps() {
    let fixture = create_readonly_test_fixture();

    let mtimes = |root: &Path| -> BTreeMap<String, std::time::SystemTime> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                let relative = e.path().strip_prefix(root).unwrap().to_string_lossy().to_string();
                (relative, fs::metadata(e.path()).unwrap().modified().unwrap())
            })
            .collect()
    };

    let before = mtimes(fixture.path());

    // Small delay so any write would show a timestamp change
    std::thread::sleep(std::time::Duration::from_millis(100));
    scanner_for_fixture(&fixture).scan(None, None);

    assert_eq!(before, mtimes(fixture.path()));
}
