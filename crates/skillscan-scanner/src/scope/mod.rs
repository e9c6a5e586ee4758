//! Directory layouts shared by the per-tool scanners

pub mod enterprise;
pub mod markdown;
pub mod project;

pub use enterprise::enterprise_dir;
pub use markdown::{find_markdown, find_skills, Found, SKILL_FILE};
pub use project::find_repo_root;
