//! forge
//!
//! Knowledge about git hosting services (GitHub, GitLab).
//!
//! # Modules
//!
//! - `provider`: [`ForgeProvider`] and the hostname → provider [`ProviderMapping`]
//! - `url`: remote URL normalization ([`normalize_remote_url`])
//!
//! Nothing here talks to the network; "forge" only decides how a file URL
//! is spelled for a given host.

mod provider;
mod url;

pub use provider::{ForgeProvider, ProviderMapping};
pub use self::url::{normalize_remote_url, ssh_to_https, NormalizedRemote};

use thiserror::Error;

/// Errors from remote URL classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForgeError {
    /// The remote is not scp-style SSH or HTTP(S).
    #[error("Can't convert {0} to https url")]
    UnsupportedUrlScheme(String),

    /// The rewritten URL could not be parsed.
    #[error("invalid remote url {url}: {message}")]
    InvalidRemoteUrl {
        /// The URL after rewriting
        url: String,
        /// Parser message
        message: String,
    },

    /// The host (or a configured tag) does not map to a known provider.
    #[error("Unable to determine provider for {0}")]
    UnknownProvider(String),
}
