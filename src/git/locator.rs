//! git::locator
//!
//! Find the repository that encloses a file.
//!
//! The search is lexical: it walks the target path's ancestors (starting with
//! the directory that contains it, ending with the filesystem root) and stops
//! at the first one holding a `.git/config` file. Symlinks are not resolved,
//! which keeps the repository root a literal prefix of the target path.

use std::path::{Path, PathBuf};

use super::GitError;

/// Where a repository's config was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedConfig {
    /// Working tree root (the directory containing `.git`)
    pub repo_root: PathBuf,
    /// Path to `<repo_root>/.git/config`
    pub config_path: PathBuf,
}

/// Search upward from `file` for `.git/config`.
///
/// # Errors
///
/// Returns [`GitError::ConfigNotFound`] if no ancestor, up to and including
/// the filesystem root, has one.
pub fn locate_config(file: &Path) -> Result<LocatedConfig, GitError> {
    let start = file.parent().unwrap_or(file);

    for dir in start.ancestors() {
        let config_path = dir.join(".git").join("config");
        if config_path.is_file() {
            return Ok(LocatedConfig {
                repo_root: dir.to_path_buf(),
                config_path,
            });
        }
    }

    Err(GitError::ConfigNotFound {
        path: file.to_path_buf(),
    })
}
