//! git
//!
//! Single interface for everything that touches git.
//!
//! # Architecture
//!
//! This module is the **only doorway** to git. Nothing else in the crate
//! reads `.git/` or spawns `git`. No other module should import `git2`.
//!
//! # Responsibilities
//!
//! - Repository discovery: find the nearest ancestor with `.git/config`
//!   ([`locate_config`])
//! - Remote lookup: first `remote` section and its `url` ([`read_remote`]),
//!   parsed by libgit2 so git's own config dialect is honored
//! - Current branch: `git branch --show-current` behind the
//!   [`BranchSource`] trait ([`GitCli`])
//!
//! # Example
//!
//! ```ignore
//! use gitopener::git::{locate_config, read_remote, BranchSource, GitCli};
//! use std::path::Path;
//!
//! let located = locate_config(Path::new("/work/repo/src/main.rs"))?;
//! let remote = read_remote(&located.config_path)?;
//! let branch = GitCli::new().current_branch(&located.repo_root)?;
//! println!("{} on {}", remote.url, branch);
//! ```

mod branch;
mod locator;
mod remote;

pub use branch::{BranchSource, FixedBranch, GitCli};
pub use locator::{locate_config, LocatedConfig};
pub use remote::{read_remote, RemoteConfig};

use std::path::PathBuf;

use thiserror::Error;

/// Errors from git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// No ancestor directory of the target contains `.git/config`.
    #[error("Unable to locate git config for {path}")]
    ConfigNotFound {
        /// The file whose ancestors were searched
        path: PathBuf,
    },

    /// libgit2 refused to parse the config file.
    #[error("failed to parse git config {path}: {message}")]
    MalformedConfig {
        /// The config file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// No `remote` section, or the first one has no `url`.
    #[error("Couldn't find remote section or url in {path}")]
    NoRemoteFound {
        /// The config file
        path: PathBuf,
    },

    /// `git branch --show-current` could not be run or failed.
    #[error("Unable to determine branch name: {message}\n{stderr}")]
    BranchDetectionFailed {
        /// Spawn error or exit status
        message: String,
        /// Captured standard error of the child
        stderr: String,
    },
}
