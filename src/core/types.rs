//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`TargetFile`] - The file (and optional line) the user asked to open
//!
//! # Examples
//!
//! ```
//! use gitopener::core::types::TargetFile;
//! use std::path::Path;
//!
//! let target = TargetFile::parse("src/app.go:42", Path::new("/repo")).unwrap();
//! assert_eq!(target.path(), Path::new("/repo/src/app.go"));
//! assert_eq!(target.line(), Some(42));
//!
//! assert!(TargetFile::parse("src/app.go:abc", Path::new("/repo")).is_err());
//! ```

use std::path::{Path, PathBuf};

use normalize_path::NormalizePath;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid line number '{input}' in {arg}: {reason}")]
    InvalidLineNumber {
        /// The full argument as given
        arg: String,
        /// The text after the last ':'
        input: String,
        /// Why it did not parse
        reason: String,
    },
}

/// A file to resolve, with an optional 1-based line number.
///
/// Parsed from a CLI argument of the form `<path>[:<line>]`. The path is made
/// absolute against the working directory and lexically cleaned (`.` and
/// `..` removed); symlinks are not resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
    line: Option<u64>,
}

impl TargetFile {
    /// Create a target from an already-absolute path.
    pub fn new(path: impl Into<PathBuf>, line: Option<u64>) -> Self {
        Self {
            path: path.into(),
            line,
        }
    }

    /// Parse `<path>[:<line>]` relative to `cwd`.
    ///
    /// The argument is split at the last `:` (when it is not the first
    /// character). Everything after it must be a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::InvalidLineNumber`] if the suffix after the last
    /// `:` is not a valid non-negative integer.
    pub fn parse(arg: &str, cwd: &Path) -> Result<Self, TypeError> {
        let (path_part, line) = match arg.rfind(':') {
            Some(idx) if idx > 0 => {
                let suffix = &arg[idx + 1..];
                let line = suffix
                    .parse::<u64>()
                    .map_err(|e| TypeError::InvalidLineNumber {
                        arg: arg.to_string(),
                        input: suffix.to_string(),
                        reason: e.to_string(),
                    })?;
                (&arg[..idx], Some(line))
            }
            _ => (arg, None),
        };

        Ok(Self {
            path: cwd.join(path_part).normalize(),
            line,
        })
    }

    /// Absolute path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Line number exactly as given, if any.
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    /// URL fragment for the line (`#L<N>`), or `None` when there is no
    /// line or it is zero.
    pub fn line_anchor(&self) -> Option<String> {
        self.line.filter(|n| *n > 0).map(|n| format!("#L{}", n))
    }
}
