//! engine::resolve
//!
//! File path → web URL.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use super::{ResolveError, ResolveRequest};
use crate::core::types::TargetFile;
use crate::forge::{normalize_remote_url, ForgeProvider, ProviderMapping};
use crate::git::{locate_config, read_remote, BranchSource};
use crate::ui::output::{self, Verbosity};

/// The repository a target file belongs to, as seen from the web.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRepo {
    /// Working tree root
    pub repo_root: PathBuf,
    /// HTTPS base URL, no trailing slash or `.git`
    pub base_url: String,
    /// Provider the remote host maps to
    pub provider: ForgeProvider,
}

/// Find and classify the repository containing `file`.
///
/// # Errors
///
/// Returns the first failure among locating the config, reading its remote
/// and normalizing the remote URL.
pub fn resolve_repo(
    file: &Path,
    mapping: &ProviderMapping,
    verbosity: Verbosity,
) -> Result<ResolvedRepo, ResolveError> {
    let located = locate_config(file)?;
    output::debug(
        format!("found git config at {}", located.config_path.display()),
        verbosity,
    );

    let remote = read_remote(&located.config_path)?;
    output::debug(
        format!("using [{}] url = {}", remote.section, remote.url),
        verbosity,
    );

    let normalized = normalize_remote_url(&remote.url, mapping)?;
    output::debug(
        format!(
            "base url {} (host {} is {})",
            normalized.base_url, normalized.host, normalized.provider
        ),
        verbosity,
    );

    Ok(ResolvedRepo {
        repo_root: located.repo_root,
        base_url: normalized.base_url,
        provider: normalized.provider,
    })
}

/// Path of `file` relative to `repo_root`.
///
/// This is a plain string-prefix strip of `repo_root` plus one separator.
/// It does not canonicalize either side, so a root reached through a
/// symlink or spelled with different case will not match; in that case the
/// full path is returned.
pub fn relative_path(repo_root: &Path, file: &Path) -> String {
    let root = repo_root.to_string_lossy();
    let file = file.to_string_lossy();

    let mut prefix = root.into_owned();
    if !prefix.ends_with(MAIN_SEPARATOR) {
        prefix.push(MAIN_SEPARATOR);
    }

    match file.strip_prefix(prefix.as_str()) {
        Some(rest) => rest.to_string(),
        None => file.into_owned(),
    }
}

/// Build the final URL.
///
/// `base_url + blob_prefix + "/" + branch + "/" + relative`, followed by
/// `#L<n>` when the target has a line greater than zero.
pub fn assemble_url(repo: &ResolvedRepo, branch: &str, target: &TargetFile) -> String {
    let relative = relative_path(&repo.repo_root, target.path());
    let mut url = format!(
        "{}{}/{}/{}",
        repo.base_url,
        repo.provider.blob_prefix(),
        branch,
        relative
    );
    if let Some(anchor) = target.line_anchor() {
        url.push_str(&anchor);
    }
    url
}

/// Resolve `request` into a web URL.
///
/// The branch source is consulted only when the request carries no
/// (non-empty) branch.
///
/// # Errors
///
/// Returns [`ResolveError`] from whichever step failed first.
pub fn resolve(
    request: &ResolveRequest,
    mapping: &ProviderMapping,
    branches: &dyn BranchSource,
    verbosity: Verbosity,
) -> Result<String, ResolveError> {
    let repo = resolve_repo(request.target.path(), mapping, verbosity)?;

    let branch = match request.branch.as_deref().filter(|b| !b.is_empty()) {
        Some(branch) => branch.to_string(),
        None => {
            let branch = branches.current_branch(&repo.repo_root)?;
            output::debug(format!("current branch is {}", branch), verbosity);
            branch
        }
    };

    Ok(assemble_url(&repo, &branch, &request.target))
}
