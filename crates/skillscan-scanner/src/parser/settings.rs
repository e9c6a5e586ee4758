//! settings.json parser

use crate::error::ScanResult;
use serde::Deserialize;
use std::collections::HashMap;

/// Raw settings.json structure, only the fields the scanner needs
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    #[serde(default)]
    enabled_plugins: Option<HashMap<String, serde_json::Value>>,
}

/// Parse the `enabledPlugins` map of a settings file.
///
/// Keys are `name@marketplace`. Values that are not booleans count as
/// disabled.
///
/// # Errors
/// Returns an error if the content is not a JSON object
pub fn parse_enabled_plugins(content: &str) -> ScanResult<HashMap<String, bool>> {
    let raw: RawSettings = serde_json::from_str(content)?;
    Ok(raw
        .enabled_plugins
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.as_bool().unwrap_or(false)))
        .collect())
}
