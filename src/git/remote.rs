//! git::remote
//!
//! Read the remote URL out of a repository config.
//!
//! # Selection
//!
//! The first section header (in file order) whose name starts with `remote`
//! is used, whatever it is called. A repository with both `origin` and
//! `upstream` resolves to whichever appears first in `.git/config`. That
//! section must carry a `url` key; there is no fallback to a later remote,
//! even when the first one is an empty `[remote "x"]` header.
//!
//! libgit2 validates the file and reads the value. Headers are taken from
//! the file text because libgit2 only reports sections that hold keys.

use std::fs;
use std::path::Path;

use super::GitError;

/// The remote section that was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Section name as libgit2 spells it, e.g. `remote.origin`
    pub section: String,
    /// Raw value of the `url` key
    pub url: String,
}

/// Parse the config at `config_path` and return its first remote.
///
/// The file is opened with [`git2::Config::open`], which only reads that
/// file (no global or system config). The handle is dropped before this
/// function returns.
///
/// # Errors
///
/// - [`GitError::MalformedConfig`] if the file cannot be read or parsed
/// - [`GitError::NoRemoteFound`] if there is no remote section or the first
///   one lacks `url`
pub fn read_remote(config_path: &Path) -> Result<RemoteConfig, GitError> {
    let malformed = |message: String| GitError::MalformedConfig {
        path: config_path.to_path_buf(),
        message,
    };
    let not_found = || GitError::NoRemoteFound {
        path: config_path.to_path_buf(),
    };

    let config =
        git2::Config::open(config_path).map_err(|e| malformed(e.message().to_string()))?;
    let text = fs::read_to_string(config_path).map_err(|e| malformed(e.to_string()))?;

    let section = text
        .lines()
        .filter_map(section_name)
        .find(|name| name.starts_with("remote"))
        .ok_or_else(not_found)?;

    match config.get_string(&format!("{}.url", section)) {
        Ok(url) => Ok(RemoteConfig { section, url }),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Err(not_found()),
        Err(e) => Err(malformed(e.message().to_string())),
    }
}

/// Name of the section a header line opens, normalized the way libgit2
/// names it: section lowercased, quoted subsection kept verbatim.
///
/// `[remote "origin"]` gives `remote.origin`, `[Remote.Origin]` gives
/// `remote.origin`. Lines that are not headers give `None`.
fn section_name(line: &str) -> Option<String> {
    let body = line.trim_start().strip_prefix('[')?;

    match body.find('"') {
        Some(quote) if !body[..quote].contains(']') => {
            let name = body[..quote].trim().to_lowercase();
            let mut subsection = String::new();
            let mut chars = body[quote + 1..].chars();
            while let Some(c) = chars.next() {
                match c {
                    '"' => return Some(format!("{}.{}", name, subsection)),
                    '\\' => subsection.extend(chars.next()),
                    _ => subsection.push(c),
                }
            }
            None
        }
        _ => {
            let end = body.find(']')?;
            Some(body[..end].trim().to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_file(contents: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config");
        fs::write(&path, contents).unwrap();
        (temp, path)
    }

    #[test]
    fn reads_origin_url() {
        let (_temp, path) = config_file(
            r#"[core]
	repositoryformatversion = 0
	bare = false
[remote "origin"]
	url = git@github.com:acme/widget.git
	fetch = +refs/heads/*:refs/remotes/origin/*
[branch "main"]
	remote = origin
	merge = refs/heads/main
"#,
        );

        let remote = read_remote(&path).unwrap();
        assert_eq!(remote.section, "remote.origin");
        assert_eq!(remote.url, "git@github.com:acme/widget.git");
    }

    #[test]
    fn first_remote_wins() {
        let (_temp, path) = config_file(
            r#"[remote "upstream"]
	url = https://github.com/upstream/widget.git
[remote "origin"]
	url = https://github.com/fork/widget.git
"#,
        );

        let remote = read_remote(&path).unwrap();
        assert_eq!(remote.section, "remote.upstream");
        assert_eq!(remote.url, "https://github.com/upstream/widget.git");
    }

    #[test]
    fn url_after_other_keys() {
        let (_temp, path) = config_file(
            r#"[remote "origin"]
	fetch = +refs/heads/*:refs/remotes/origin/*
	url = https://gitlab.com/team/proj.git
"#,
        );

        assert_eq!(read_remote(&path).unwrap().url, "https://gitlab.com/team/proj.git");
    }

    #[test]
    fn first_remote_without_url_fails() {
        let (_temp, path) = config_file(
            r#"[remote "origin"]
	fetch = +refs/heads/*:refs/remotes/origin/*
[remote "upstream"]
	url = https://github.com/upstream/widget.git
"#,
        );

        let err = read_remote(&path).unwrap_err();
        assert!(matches!(err, GitError::NoRemoteFound { .. }));
    }

    #[test]
    fn empty_first_remote_does_not_fall_through() {
        let (_temp, path) = config_file(
            r#"[remote "a"]
[remote "b"]
	url = https://github.com/b/b.git
"#,
        );

        let err = read_remote(&path).unwrap_err();
        assert!(matches!(err, GitError::NoRemoteFound { .. }));
    }

    #[test]
    fn empty_first_remote_after_other_sections() {
        let (_temp, path) = config_file(
            r#"[core]
	bare = false
[remote "origin"]
[branch "main"]
	remote = origin
[remote "upstream"]
	url = https://github.com/upstream/widget.git
"#,
        );

        assert!(matches!(
            read_remote(&path),
            Err(GitError::NoRemoteFound { .. })
        ));
    }

    #[test]
    fn subsection_with_dots_and_case() {
        let (_temp, path) = config_file(
            r#"[remote "My.Fork"]
	url = https://github.com/me/widget.git
"#,
        );

        let remote = read_remote(&path).unwrap();
        assert_eq!(remote.section, "remote.My.Fork");
        assert_eq!(remote.url, "https://github.com/me/widget.git");
    }

    #[test]
    fn no_remote_section() {
        let (_temp, path) = config_file("[core]\n\tbare = false\n");

        let err = read_remote(&path).unwrap_err();
        assert!(matches!(err, GitError::NoRemoteFound { ref path } if path.ends_with("config")));
    }

    #[test]
    fn empty_file() {
        let (_temp, path) = config_file("");
        assert!(matches!(
            read_remote(&path),
            Err(GitError::NoRemoteFound { .. })
        ));
    }

    #[test]
    fn quoted_value_and_comments() {
        let (_temp, path) = config_file(
            r#"# managed by hand
[remote "origin"]
	; the canonical repo
	url = "https://github.com/acme/widget"
"#,
        );

        assert_eq!(read_remote(&path).unwrap().url, "https://github.com/acme/widget");
    }

    mod section_name {
        use super::super::section_name;

        #[test]
        fn quoted_subsection() {
            assert_eq!(section_name("[remote \"origin\"]").as_deref(), Some("remote.origin"));
            assert_eq!(section_name("  [Remote \"Origin\"]").as_deref(), Some("remote.Origin"));
        }

        #[test]
        fn escaped_quote_in_subsection() {
            assert_eq!(
                section_name(r#"[remote "a\"b"]"#).as_deref(),
                Some("remote.a\"b")
            );
        }

        #[test]
        fn legacy_dotted_form() {
            assert_eq!(section_name("[Remote.Origin]").as_deref(), Some("remote.origin"));
            assert_eq!(section_name("[core]").as_deref(), Some("core"));
        }

        #[test]
        fn non_headers() {
            assert_eq!(section_name("\turl = https://github.com/a/b"), None);
            assert_eq!(section_name("# [remote \"x\"]"), None);
            assert_eq!(section_name(""), None);
        }
    }

    #[test]
    fn malformed_header() {
        let (_temp, path) = config_file("[remote \"origin\"\n\turl = x\n");

        let err = read_remote(&path).unwrap_err();
        assert!(matches!(err, GitError::MalformedConfig { .. }));
    }
}
