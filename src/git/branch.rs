//! git::branch
//!
//! Current-branch detection.
//!
//! # Design
//!
//! Detection is the only step that spawns a process, so it sits behind the
//! narrow [`BranchSource`] trait. [`GitCli`] is the real implementation;
//! [`FixedBranch`] answers with a constant and never spawns anything.
//!
//! The child is waited on without a timeout. A hung `git` (for instance on
//! a stale `index.lock` prompt) blocks the caller until it exits.

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use super::GitError;

/// Something that can tell which branch a working tree has checked out.
pub trait BranchSource {
    /// Name of the branch checked out in `repo_dir`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::BranchDetectionFailed`] if the branch cannot be
    /// determined.
    fn current_branch(&self, repo_dir: &Path) -> Result<String, GitError>;
}

/// Asks the `git` executable (`git branch --show-current`).
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    /// Use `git` from `PATH`.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable instead of `git`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl BranchSource for GitCli {
    fn current_branch(&self, repo_dir: &Path) -> Result<String, GitError> {
        let output = Command::new(&self.program)
            .args(["branch", "--show-current"])
            .current_dir(repo_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| GitError::BranchDetectionFailed {
                message: e.to_string(),
                stderr: String::new(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(GitError::BranchDetectionFailed {
                message: output.status.to_string(),
                stderr,
            });
        }

        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if branch.is_empty() {
            return Err(GitError::BranchDetectionFailed {
                message: "HEAD is detached; pass --branch".to_string(),
                stderr,
            });
        }

        Ok(branch)
    }
}

/// Always reports the same branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBranch(pub String);

impl BranchSource for FixedBranch {
    fn current_branch(&self, _repo_dir: &Path) -> Result<String, GitError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn reads_checked_out_branch() {
        let temp = TempDir::new().unwrap();
        run_git(temp.path(), &["init", "-q", "-b", "trunk"]);

        let branch = GitCli::new().current_branch(temp.path()).unwrap();
        assert_eq!(branch, "trunk");
    }

    #[test]
    fn reads_branch_with_slashes() {
        let temp = TempDir::new().unwrap();
        run_git(temp.path(), &["init", "-q", "-b", "feature/login-form"]);

        let branch = GitCli::new().current_branch(temp.path()).unwrap();
        assert_eq!(branch, "feature/login-form");
    }

    #[test]
    fn detached_head_fails() {
        let temp = TempDir::new().unwrap();
        run_git(temp.path(), &["init", "-q", "-b", "main"]);
        run_git(
            temp.path(),
            &[
                "-c",
                "user.name=Test User",
                "-c",
                "user.email=test@example.com",
                "commit",
                "-q",
                "--allow-empty",
                "-m",
                "init",
            ],
        );
        run_git(temp.path(), &["checkout", "-q", "--detach"]);

        let err = GitCli::new().current_branch(temp.path()).unwrap_err();
        assert!(err.to_string().contains("detached"));
    }

    #[test]
    fn outside_repository_fails_with_stderr() {
        let temp = TempDir::new().unwrap();
        let err = GitCli::new().current_branch(temp.path()).unwrap_err();
        match err {
            GitError::BranchDetectionFailed { stderr, .. } => {
                assert!(stderr.contains("not a git repository"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_program_fails() {
        let temp = TempDir::new().unwrap();
        let err = GitCli::with_program("gitopener-no-such-git")
            .current_branch(temp.path())
            .unwrap_err();
        assert!(matches!(
            err,
            GitError::BranchDetectionFailed { ref stderr, .. } if stderr.is_empty()
        ));
    }

    #[test]
    fn fixed_branch() {
        let source = FixedBranch("main".to_string());
        assert_eq!(source.current_branch(Path::new("/")).unwrap(), "main");
    }
}
