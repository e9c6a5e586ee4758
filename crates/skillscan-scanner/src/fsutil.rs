//! Failure-tolerant filesystem checks
//!
//! A partially installed or misconfigured tool must never abort a scan, so
//! every check collapses I/O errors to its "nothing here" value.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Whether `path` is a directory (following symlinks)
pub fn is_dir(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_dir())
}

/// Whether `path` is a regular file (following symlinks)
pub fn is_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| m.is_file())
}

/// Names of the immediate children of `dir`, sorted byte-lexicographically.
///
/// Missing or unreadable directories yield an empty list.
pub fn sorted_dir(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect()
}

/// Full contents of `path`, or an empty string if it cannot be read.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_file_safe(path: &Path) -> String {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}
