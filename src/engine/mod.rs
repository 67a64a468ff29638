//! engine
//!
//! Orchestrates one resolution: Locate -> Parse -> Normalize -> Branch -> Assemble.
//!
//! # Lifecycle
//!
//! ```text
//! TargetFile
//!   -> locate_config        (nearest ancestor with .git/config)
//!   -> read_remote          (first remote section, its url)
//!   -> normalize_remote_url (https base url + provider)
//!   -> current_branch       (only if no branch was given)
//!   -> assemble_url         (base + blob prefix + branch + relative path + #L<n>)
//! ```
//!
//! Every step either succeeds or ends the run with a [`ResolveError`]. There
//! is no retry and no fallback (no second remote, no default branch).

mod resolve;

pub use resolve::{assemble_url, relative_path, resolve, resolve_repo, ResolvedRepo};

use thiserror::Error;

use crate::core::config::ConfigError;
use crate::core::types::{TargetFile, TypeError};
use crate::forge::ForgeError;
use crate::git::GitError;

/// Inputs for one resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    /// File (and line) to link to
    pub target: TargetFile,
    /// Branch override; `None` (or empty) means "ask git"
    pub branch: Option<String>,
}

/// Any failure that ends a resolution.
///
/// Messages are those of the underlying layer error; use
/// [`ResolveError::kind`] to branch on the failure category.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Forge(#[from] ForgeError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Flat classification of [`ResolveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    ConfigNotFound,
    MalformedConfig,
    NoRemoteFound,
    UnsupportedUrlScheme,
    InvalidRemoteUrl,
    UnknownProvider,
    BranchDetectionFailed,
    InvalidLineNumber,
    InvalidUserConfig,
}

impl ResolveError {
    /// Which kind of failure this is.
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            ResolveError::Git(e) => match e {
                GitError::ConfigNotFound { .. } => ResolveErrorKind::ConfigNotFound,
                GitError::MalformedConfig { .. } => ResolveErrorKind::MalformedConfig,
                GitError::NoRemoteFound { .. } => ResolveErrorKind::NoRemoteFound,
                GitError::BranchDetectionFailed { .. } => ResolveErrorKind::BranchDetectionFailed,
            },
            ResolveError::Forge(e) => match e {
                ForgeError::UnsupportedUrlScheme(_) => ResolveErrorKind::UnsupportedUrlScheme,
                ForgeError::InvalidRemoteUrl { .. } => ResolveErrorKind::InvalidRemoteUrl,
                ForgeError::UnknownProvider(_) => ResolveErrorKind::UnknownProvider,
            },
            ResolveError::Type(TypeError::InvalidLineNumber { .. }) => {
                ResolveErrorKind::InvalidLineNumber
            }
            ResolveError::Config(_) => ResolveErrorKind::InvalidUserConfig,
        }
    }
}
