//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Host entries are checked after parsing: they must be bare hostnames
//! (no scheme, no path). Provider tags in `[domains]` are checked when the
//! table is folded into a [`ProviderMapping`].

use std::collections::BTreeMap;

use serde::Deserialize;

use super::ConfigError;
use crate::forge::{ForgeError, ForgeProvider, ProviderMapping};

/// User configuration.
///
/// # Example
///
/// ```toml
/// github_domains = ["github.corp.example"]
/// gitlab_domains = ["gitlab.example.com"]
/// open = true
///
/// [domains]
/// "code.example.org" = "gitlab"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Hosts served by GitHub (Enterprise)
    pub github_domains: Vec<String>,

    /// Hosts served by GitLab
    pub gitlab_domains: Vec<String>,

    /// Host → provider tag
    pub domains: BTreeMap<String, String>,

    /// Open the URL in a browser by default
    pub open: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a host entry is not a bare
    /// hostname.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.github_domains
            .iter()
            .chain(self.gitlab_domains.iter())
            .chain(self.domains.keys())
            .try_for_each(|host| validate_host(host))
    }

    /// Register every configured host in `mapping`.
    ///
    /// Order: `[domains]`, then `github_domains`, then `gitlab_domains`.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::UnknownProvider`] if a `[domains]` tag is not a
    /// known provider.
    pub fn register_domains(&self, mapping: &mut ProviderMapping) -> Result<(), ForgeError> {
        for (host, tag) in &self.domains {
            mapping.register_tag(host, tag)?;
        }
        mapping.extend(&self.github_domains, ForgeProvider::GitHub);
        mapping.extend(&self.gitlab_domains, ForgeProvider::GitLab);
        Ok(())
    }
}

/// Check that `host` looks like a hostname (optionally with a port).
pub fn validate_host(host: &str) -> Result<(), ConfigError> {
    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue("empty domain".to_string()));
    }
    if trimmed.contains("://") || trimmed.contains('/') || trimmed.contains(char::is_whitespace)
    {
        return Err(ConfigError::InvalidValue(format!(
            "invalid domain '{}': expected a bare hostname like git.example.com",
            host
        )));
    }
    Ok(())
}
