//! Plain-text terminal report

use crate::artifacts::PluginInfo;
use crate::inventory::Inventory;
use crate::types::{ArtifactType, Level};
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Render the inventory grouped by level, plugins last, then a summary.
///
/// `verbose` adds full descriptions and paths.
#[must_use]
pub fn to_terminal(inventory: &Inventory, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str("Skill Scan Report\n");
    output.push_str(&"=".repeat(RULE_WIDTH));
    output.push_str("\n\n");

    let mut any_output = false;

    for level in [Level::User, Level::Project, Level::Enterprise] {
        let items: Vec<_> = inventory.by_level(level).collect();
        if items.is_empty() {
            continue;
        }
        any_output = true;
        push_heading(&mut output, level.label());

        for item in items {
            let _ = writeln!(
                output,
                "  * {:<44} [{}] ({})",
                item.name,
                item.artifact_type,
                item.tool.label()
            );
            let description = if item.description.is_empty() {
                "(no description)"
            } else {
                item.description.as_str()
            };
            let _ = writeln!(output, "    {}", truncate(description, 72));
            if verbose {
                let _ = writeln!(output, "    path: {}", item.path.display());
            }
        }
        output.push('\n');
    }

    if !inventory.plugins.is_empty() || inventory.by_level(Level::Plugin).next().is_some() {
        any_output = true;
        push_heading(&mut output, Level::Plugin.label());
        for plugin in &inventory.plugins {
            push_plugin(&mut output, plugin, verbose);
        }
    }

    if !any_output {
        output.push_str("  (no skills found)\n\n");
    }

    push_summary(&mut output, inventory);
    output
}

fn push_heading(output: &mut String, label: &str) {
    let fill = RULE_WIDTH.saturating_sub(label.len() + 4);
    let _ = writeln!(output, "-- {label} {}", "-".repeat(fill));
}

fn push_plugin(output: &mut String, plugin: &PluginInfo, verbose: bool) {
    let status = if plugin.enabled { "enabled" } else { "disabled" };
    let marketplace = if plugin.marketplace.is_empty() {
        String::new()
    } else {
        format!(" @ {}", plugin.marketplace)
    };
    let _ = writeln!(
        output,
        "  > {}{marketplace}  [{status}] ({})",
        plugin.name,
        plugin.tool.label()
    );
    if verbose {
        if !plugin.description.is_empty() {
            let _ = writeln!(output, "    {}", truncate(&plugin.description, 68));
        }
        let _ = writeln!(output, "    path: {}", plugin.install_path.display());
    }

    if plugin.items.is_empty() {
        output.push_str("    (no items found)\n");
    }

    let last = plugin.items.len().saturating_sub(1);
    for (i, item) in plugin.items.iter().enumerate() {
        let connector = if i == last { "`-" } else { "|-" };
        let label = if item.artifact_type == ArtifactType::Command {
            if item.name == plugin.name {
                format!("/{}", item.name)
            } else {
                format!("/{}:{}", plugin.name, item.name)
            }
        } else {
            item.name.clone()
        };
        let _ = writeln!(output, "    {connector} {label:<38} [{}]", item.artifact_type);
        if verbose && !item.description.is_empty() {
            let padding = if i == last { "   " } else { "|  " };
            let _ = writeln!(output, "    {padding} {}", truncate(&item.description, 60));
        }
    }
    output.push('\n');
}

fn push_summary(output: &mut String, inventory: &Inventory) {
    let summary = inventory.summary();
    push_heading(output, "Summary");
    let _ = writeln!(
        output,
        "  User: {}  Project: {}  Enterprise: {}",
        summary.user, summary.project, summary.enterprise
    );

    let mut detail = format!(
        "commands {} / agents {} / skills {}",
        summary.plugin_commands, summary.plugin_agents, summary.plugin_skills
    );
    if summary.plugin_hooks > 0 {
        let _ = write!(detail, " / hooks {}", summary.plugin_hooks);
    }
    let _ = writeln!(
        output,
        "  Plugins: {} ({} enabled)  Items: {detail}",
        summary.plugin_count, summary.enabled_plugins
    );
    let _ = writeln!(output, "  Total: {} items", summary.total);
}

/// Collapse newlines and cut to `max_len` characters, ending in `...`
fn truncate(text: &str, max_len: usize) -> String {
    let clean = text.replace('\n', " ");
    let clean = clean.trim();
    if clean.chars().count() <= max_len {
        return clean.to_string();
    }
    let mut cut: String = clean.chars().take(max_len.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}
