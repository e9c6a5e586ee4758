//! Skill scanner - discovery of AI coding assistant extensions
//!
//! This crate provides read-only scanning of the skills, commands, agents
//! and plugins installed for Claude Code, Codex, Gemini CLI and Copilot CLI
//! across user, project, plugin and enterprise levels.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::map_unwrap_or
)]

pub mod artifacts;
pub mod config;
pub mod error;
pub mod fsutil;
pub mod inventory;
pub mod output;
pub mod parser;
pub mod plugins;
pub mod scan;
pub mod scope;
pub mod tools;
pub mod types;

pub use artifacts::{Artifact, PluginInfo};
pub use config::ScanConfig;
pub use error::{ScanError, ScanResult};
pub use inventory::{Inventory, Summary};
pub use scan::Scanner;
pub use tools::ToolScanner;
pub use types::{ArtifactType, HostInfo, Level, Tool};
