//! Output formatters for inventory

pub mod json;
pub mod terminal;

pub use json::to_json;
pub use terminal::to_terminal;
