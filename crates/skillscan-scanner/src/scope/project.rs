//! Project root discovery

use crate::fsutil::is_dir;
use std::path::{Path, PathBuf};

/// Find the nearest directory at or above `start` that contains a `.git`
/// directory.
///
/// Walks up to the filesystem root; returns `None` if no repository is found.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| is_dir(&dir.join(".git")))
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_repo_root_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        let repo = temp.path().join("repo");
        let nested = repo.join("src").join("deep");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_repo_root(&nested), Some(repo.clone()));
        assert_eq!(find_repo_root(&repo), Some(repo));
    }

    #[test]
    fn test_git_file_is_not_a_marker() {
        let temp = TempDir::new().unwrap();
        let worktree = temp.path().join("wt");
        fs::create_dir_all(&worktree).unwrap();
        fs::write(worktree.join(".git"), "gitdir: elsewhere").unwrap();

        let found = find_repo_root(&worktree);
        assert_ne!(found.as_deref(), Some(worktree.as_path()));
    }
}
