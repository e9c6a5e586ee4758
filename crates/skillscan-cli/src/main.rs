//! skillscan - report the skills installed for AI coding assistants
//!
//! Scans Claude Code, Codex, Gemini CLI and Copilot CLI configuration at
//! user, project, plugin and enterprise levels and prints the result.

use anyhow::Context;
use clap::Parser;
use skillscan_scanner::output::{to_json, to_terminal};
use skillscan_scanner::{HostInfo, Level, ScanConfig, Scanner, Tool};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skillscan")]
#[command(
    about = "Skill scanner - list skills, commands, agents and plugins of AI coding assistants"
)]
#[command(version)]
struct Cli {
    /// Print the report as JSON
    #[arg(short, long)]
    json: bool,

    /// Project directory to scan
    #[arg(short = 'd', long, env = "SKILLSCAN_PROJECT_DIR", default_value = ".")]
    project_dir: PathBuf,

    /// Comma separated levels (user, project, plugin, enterprise)
    #[arg(short, long, value_name = "LEVELS")]
    level: Option<String>,

    /// Comma separated tools (claude-code, codex, gemini, copilot)
    #[arg(short, long, value_name = "TOOLS")]
    tool: Option<String>,

    /// Show full descriptions and paths
    #[arg(short, long)]
    verbose: bool,

    /// Scan tools concurrently
    #[arg(long)]
    parallel: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("SKILLSCAN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run_scan(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run_scan(cli: &Cli) -> anyhow::Result<()> {
    let host = HostInfo::try_current().context("cannot resolve user home directory")?;
    let config = ScanConfig::with_host(&cli.project_dir, host);
    let scanner = Scanner::with_config(config).with_parallel(cli.parallel);

    let project_dir = &scanner.config().project_dir;
    if !project_dir.is_dir() {
        tracing::warn!(path = %project_dir.display(), "project directory does not exist");
    }

    let tools = parse_filter(cli.tool.as_deref(), "tool", Tool::parse_list);
    let levels = parse_filter(cli.level.as_deref(), "level", Level::parse_list);

    let inventory = scanner.scan(tools.as_deref(), levels.as_deref());

    if cli.json {
        let json = to_json(&inventory).context("failed to serialize report")?;
        println!("{json}");
    } else {
        print!("{}", to_terminal(&inventory, cli.verbose));
    }

    Ok(())
}

/// Parse a comma separated filter, logging the tokens that were dropped.
///
/// `None` means no filtering, including when every token was unknown.
fn parse_filter<T: FromStr>(
    raw: Option<&str>,
    kind: &str,
    parse_list: fn(&str) -> Option<Vec<T>>,
) -> Option<Vec<T>> {
    let raw = raw?;
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token.parse::<T>().is_err() {
            tracing::warn!(kind, token, "ignoring unknown filter value");
        }
    }
    parse_list(raw)
}
