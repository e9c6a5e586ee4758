//! Header-block (frontmatter) parser for SKILL.md, command and agent files
//!
//! Only a flat, line-oriented subset of YAML is understood:
//!
//! ```text
//! ---
//! name: my-skill
//! description: |
//!   folded onto
//!   one line
//! ---
//! ```
//!
//! Nested structures, lists and quoting are not interpreted. Anything the
//! parser does not recognise is skipped rather than reported.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---\s*\n(.*?)\n---").expect("valid header regex"));

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_-]*):\s*(.*)").expect("valid entry regex")
});

/// Parse the leading header block of `text` into a flat key/value map.
///
/// Returns an empty map when the text does not start with a header block.
pub fn parse_frontmatter(text: &str) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();
    let Some(block) = HEADER_RE.captures(text).and_then(|c| c.get(1)) else {
        return result;
    };

    // Key waiting for `|` / `>` continuation lines, and the lines seen so far
    let mut pending: Option<String> = None;
    let mut buffer: Vec<String> = Vec::new();

    for line in block.as_str().split('\n') {
        if pending.is_some() && (line.starts_with("  ") || line.trim().is_empty()) {
            buffer.push(line.trim().to_string());
            continue;
        }

        if !buffer.is_empty() {
            if let Some(key) = pending.take() {
                result.insert(key, join_fragments(&buffer));
            }
            buffer.clear();
        }

        if let Some(caps) = ENTRY_RE.captures(line) {
            let key = caps[1].to_string();
            let value = caps[2].trim();
            if value == "|" || value == ">" {
                pending = Some(key);
            } else {
                result.insert(key, value.to_string());
                pending = None;
            }
            buffer.clear();
        }
    }

    if let Some(key) = pending {
        if !buffer.is_empty() {
            result.insert(key, join_fragments(&buffer));
        }
    }

    result
}

fn join_fragments(buffer: &[String]) -> String {
    buffer
        .iter()
        .filter(|l| !l.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name, description and remaining fields lifted out of a header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub extra: BTreeMap<String, String>,
}

/// Split the reserved `name` and `description` keys out of a parsed header.
///
/// `fallback_name` is used when the header has no `name`.
pub fn split_metadata(mut fields: BTreeMap<String, String>, fallback_name: &str) -> Metadata {
    let name = fields
        .remove("name")
        .unwrap_or_else(|| fallback_name.to_string());
    let description = fields.remove("description").unwrap_or_default();
    Metadata {
        name,
        description,
        extra: fields,
    }
}
