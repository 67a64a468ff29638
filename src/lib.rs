//! gitopener - Turn a local file path into its web URL on a git forge
//!
//! Given a file inside a git working tree, gitopener finds the repository's
//! remote, rewrites it into an HTTPS base URL, works out whether the host is
//! GitHub- or GitLab-style, and prints the URL of that file on the current
//! (or an explicit) branch, optionally anchored to a line.
//!
//! # Architecture
//!
//! The codebase is split into small layers:
//!
//! - [`cli`] - Command-line interface layer (parses args and env, maps exit codes)
//! - [`engine`] - Orchestrates Locate → Parse → Normalize → Branch → Assemble
//! - [`core`] - Domain types (target file, line numbers) and the user config file
//! - [`git`] - Single interface for everything that touches git
//! - [`forge`] - Provider mapping and remote URL normalization
//! - [`ui`] - Output helpers
//!
//! # Example
//!
//! ```no_run
//! use gitopener::core::types::TargetFile;
//! use gitopener::engine::{resolve, ResolveRequest};
//! use gitopener::forge::ProviderMapping;
//! use gitopener::git::GitCli;
//! use gitopener::ui::output::Verbosity;
//! use std::path::Path;
//!
//! let target = TargetFile::parse("src/main.rs:10", Path::new("/work/repo")).unwrap();
//! let request = ResolveRequest { target, branch: None };
//! let url = resolve(&request, &ProviderMapping::default(), &GitCli::new(), Verbosity::Normal)
//!     .unwrap();
//! println!("{}", url);
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod forge;
pub mod git;
pub mod ui;
