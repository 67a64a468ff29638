//! forge::url
//!
//! Remote URL normalization.
//!
//! Turns whatever is in `remote.<name>.url` into the HTTPS base URL of the
//! repository's web UI and classifies its host.
//!
//! # Rules
//!
//! 1. `git@host:path` becomes `https://host/path` (first `:` only).
//! 2. Anything that is not `http://` or `https://` after that is rejected.
//! 3. One trailing `/` is stripped, then one trailing `.git`.
//! 4. The host is looked up in the [`ProviderMapping`].
//!
//! The returned base URL is the trimmed input string itself, not a
//! re-serialized [`url::Url`], so path casing and ports survive untouched.

use url::{ParseError, Url};

use super::{ForgeError, ForgeProvider, ProviderMapping};

/// A remote URL rewritten for the web UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRemote {
    /// HTTPS base URL, without trailing slash or `.git`
    pub base_url: String,
    /// Hostname as parsed from the base URL
    pub host: String,
    /// Provider the host is registered as
    pub provider: ForgeProvider,
}

/// Rewrite an scp-style `git@host:path` remote into `https://host/path`.
///
/// Any other input is returned unchanged.
///
/// # Example
///
/// ```
/// use gitopener::forge::ssh_to_https;
///
/// assert_eq!(
///     ssh_to_https("git@github.com:org/repo.git"),
///     "https://github.com/org/repo.git"
/// );
/// assert_eq!(ssh_to_https("https://github.com/org/repo"), "https://github.com/org/repo");
/// ```
pub fn ssh_to_https(url: &str) -> String {
    match url.strip_prefix("git@") {
        Some(rest) => format!("https://{}", rest.replacen(':', "/", 1)),
        None => url.to_string(),
    }
}

/// Trim one trailing `/` and then one trailing `.git`.
fn trim_repo_suffix(url: &str) -> &str {
    let url = url.strip_suffix('/').unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url)
}

/// Normalize a raw remote URL and classify its host.
///
/// # Errors
///
/// - [`ForgeError::UnsupportedUrlScheme`] if the URL is neither scp-style
///   `git@…` nor `http(s)://`
/// - [`ForgeError::InvalidRemoteUrl`] if the result cannot be parsed
/// - [`ForgeError::UnknownProvider`] if the host is missing or not in
///   `mapping`
///
/// # Example
///
/// ```
/// use gitopener::forge::{normalize_remote_url, ForgeProvider, ProviderMapping};
///
/// let remote =
///     normalize_remote_url("git@github.com:acme/widget.git", &ProviderMapping::default())
///         .unwrap();
/// assert_eq!(remote.base_url, "https://github.com/acme/widget");
/// assert_eq!(remote.provider, ForgeProvider::GitHub);
/// ```
pub fn normalize_remote_url(
    raw: &str,
    mapping: &ProviderMapping,
) -> Result<NormalizedRemote, ForgeError> {
    let url = ssh_to_https(raw.trim());

    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(ForgeError::UnsupportedUrlScheme(url));
    }

    let base_url = trim_repo_suffix(&url).to_string();

    let host = match Url::parse(&base_url) {
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(ParseError::EmptyHost) => String::new(),
        Err(e) => {
            return Err(ForgeError::InvalidRemoteUrl {
                url: base_url,
                message: e.to_string(),
            })
        }
    };

    let provider = mapping
        .lookup(&host)
        .ok_or_else(|| ForgeError::UnknownProvider(format!("url: {}", host)))?;

    Ok(NormalizedRemote {
        base_url,
        host,
        provider,
    })
}
