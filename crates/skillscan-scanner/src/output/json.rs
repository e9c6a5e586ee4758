//! JSON output formatter

use crate::artifacts::{Artifact, PluginInfo};
use crate::error::ScanResult;
use crate::inventory::{Inventory, Summary};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    version: &'static str,
    scanned_at: DateTime<Utc>,
    artifacts: &'a [Artifact],
    plugins: &'a [PluginInfo],
    summary: Summary,
}

/// Convert inventory to a pretty-printed JSON report with summary counts
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(inventory: &Inventory) -> ScanResult<String> {
    let report = Report {
        version: env!("CARGO_PKG_VERSION"),
        scanned_at: Utc::now(),
        artifacts: &inventory.artifacts,
        plugins: &inventory.plugins,
        summary: inventory.summary(),
    };
    serde_json::to_string_pretty(&report).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArtifactType, Level, Tool};

    #[test]
    fn test_to_json_shape() {
        let mut inventory = Inventory::default();
        inventory.artifacts.push(Artifact::new(
            Tool::Gemini,
            ArtifactType::Skill,
            Level::Project,
            "fmt",
            "/r/.gemini/skills/fmt/SKILL.md",
        ));

        let json = to_json(&inventory).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["artifacts"][0]["tool"], "gemini");
        assert_eq!(value["artifacts"][0]["artifact_type"], "skill");
        assert_eq!(value["artifacts"][0]["level"], "project");
        assert_eq!(value["summary"]["project"], 1);
        assert_eq!(value["summary"]["total"], 1);
        assert!(value["scanned_at"].is_string());
    }
}
