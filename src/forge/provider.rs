//! forge::provider
//!
//! Forge providers and the hostname → provider mapping.
//!
//! # Design
//!
//! Which URL convention a remote uses is decided purely by its hostname.
//! The mapping starts with the public hosts (`github.com`, `gitlab.com`) and
//! is extended with self-hosted instances from the config file and the
//! `--github-domain` / `--gitlab-domain` flags. It is built once, before any
//! resolution starts, and handed to the normalizer by reference.
//!
//! # Example
//!
//! ```
//! use gitopener::forge::{ForgeProvider, ProviderMapping};
//!
//! let mut mapping = ProviderMapping::default();
//! assert_eq!(mapping.lookup("github.com"), Some(ForgeProvider::GitHub));
//! assert_eq!(mapping.lookup("git.corp.example"), None);
//!
//! mapping.register("git.corp.example", ForgeProvider::GitLab);
//! assert_eq!(mapping.lookup("git.corp.example"), Some(ForgeProvider::GitLab));
//! ```

use std::collections::BTreeMap;

use super::ForgeError;

/// Supported forge providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForgeProvider {
    /// GitHub and GitHub Enterprise
    GitHub,
    /// GitLab (gitlab.com and self-managed)
    GitLab,
}

impl ForgeProvider {
    /// Get all providers.
    pub fn all() -> &'static [ForgeProvider] {
        &[ForgeProvider::GitHub, ForgeProvider::GitLab]
    }

    /// Get the provider name as a string.
    ///
    /// This matches the tag used in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            ForgeProvider::GitHub => "github",
            ForgeProvider::GitLab => "gitlab",
        }
    }

    /// Parse a provider from a string.
    ///
    /// # Returns
    ///
    /// `Some(ForgeProvider)` if the string matches a known provider,
    /// `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use gitopener::forge::ForgeProvider;
    ///
    /// assert_eq!(ForgeProvider::parse("GitLab"), Some(ForgeProvider::GitLab));
    /// assert_eq!(ForgeProvider::parse("bitbucket"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "github" => Some(ForgeProvider::GitHub),
            "gitlab" => Some(ForgeProvider::GitLab),
            _ => None,
        }
    }

    /// Path segment placed between the repository URL and the branch when
    /// linking to a file.
    pub fn blob_prefix(&self) -> &'static str {
        match self {
            ForgeProvider::GitHub => "/blob",
            ForgeProvider::GitLab => "/-/blob",
        }
    }
}

impl std::fmt::Display for ForgeProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Hostname → provider table.
///
/// Hostnames are compared case-insensitively (stored lowercased), matching
/// how [`url::Url`] reports hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMapping {
    hosts: BTreeMap<String, ForgeProvider>,
}

impl Default for ProviderMapping {
    /// The built-in table: `github.com` and `gitlab.com`.
    fn default() -> Self {
        let mut mapping = Self::empty();
        mapping.register("github.com", ForgeProvider::GitHub);
        mapping.register("gitlab.com", ForgeProvider::GitLab);
        mapping
    }
}

impl ProviderMapping {
    /// A mapping with no hosts at all.
    pub fn empty() -> Self {
        Self {
            hosts: BTreeMap::new(),
        }
    }

    /// Register `host` as `provider`, replacing any earlier registration.
    pub fn register(&mut self, host: &str, provider: ForgeProvider) {
        self.hosts.insert(host.trim().to_lowercase(), provider);
    }

    /// Register `host` under a textual provider tag.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownProvider`] if the tag is empty or does
    /// not name a known provider.
    pub fn register_tag(&mut self, host: &str, tag: &str) -> Result<(), ForgeError> {
        let provider = ForgeProvider::parse(tag.trim()).ok_or_else(|| {
            ForgeError::UnknownProvider(format!(
                "tag '{}' on host {} (expected one of: {})",
                tag,
                host,
                available_providers_string()
            ))
        })?;
        self.register(host, provider);
        Ok(())
    }

    /// Register each host in `hosts` as `provider`.
    pub fn extend<I, S>(&mut self, hosts: I, provider: ForgeProvider)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for host in hosts {
            self.register(host.as_ref(), provider);
        }
    }

    /// Look up the provider for `host`.
    pub fn lookup(&self, host: &str) -> Option<ForgeProvider> {
        self.hosts.get(&host.to_lowercase()).copied()
    }

    /// Iterate over all registered hosts in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ForgeProvider)> {
        self.hosts.iter().map(|(h, p)| (h.as_str(), *p))
    }
}

/// Get a comma-separated string of available providers.
fn available_providers_string() -> String {
    ForgeProvider::all()
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ")
}
