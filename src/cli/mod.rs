//! cli
//!
//! Command-line interface layer for gitopener.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and `GITOPENER_*` environment variables
//! - Assemble the provider mapping and load the user config
//! - Hand off to [`crate::engine`] and print the result
//! - Map failures onto exit codes
//!
//! # Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | URL printed (or help/version/completions) |
//! | 1 | Bad flags or missing `FILE` argument; usage is printed |
//! | 2 | Resolution failed; `Error: ...` and usage are printed |

pub mod args;
pub mod completion;

pub use args::{Cli, Shell};

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser};
use thiserror::Error;

use crate::core::config::Config;
use crate::core::types::TargetFile;
use crate::engine::{self, ResolveError, ResolveRequest};
use crate::forge::{ForgeError, ForgeProvider, ProviderMapping};
use crate::git::GitCli;
use crate::ui::output::{self, Verbosity};

/// Exit code for flag errors and a missing argument.
pub const EXIT_USAGE: u8 = 1;

/// Exit code for resolution failures.
pub const EXIT_FAILURE: u8 = 2;

/// Errors that belong to the command line rather than to resolution.
#[derive(Debug, Error)]
pub enum CliError {
    /// No `FILE` argument was given.
    #[error("missing required argument <FILE[:LINE]>")]
    MissingArgument,

    /// `--open` was in effect and no browser could be launched.
    #[error("failed to open {url} in a browser: {source}")]
    Browser {
        url: String,
        source: std::io::Error,
    },
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            if code != EXIT_USAGE {
                output::error(format!("{:#}", err));
            }
            eprintln!("{}", Cli::command().render_help());
            ExitCode::from(code)
        }
    }
}

/// Exit code for an error returned by [`execute`].
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::MissingArgument) => EXIT_USAGE,
        Some(CliError::Browser { .. }) | None => EXIT_FAILURE,
    }
}

/// Execute a parsed command line.
///
/// # Errors
///
/// - [`CliError::MissingArgument`] if no file was given
/// - [`ResolveError`] for any resolution failure
/// - [`CliError::Browser`] if `--open` is in effect and launching fails
pub fn execute(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        completion::completion(shell, &mut std::io::stdout());
        return Ok(());
    }

    let verbosity = Verbosity::from_flags(cli.quiet, cli.debug);
    let file = cli.file.as_deref().ok_or(CliError::MissingArgument)?;

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let target = TargetFile::parse(file, &cwd).map_err(ResolveError::from)?;

    let config = Config::load().map_err(ResolveError::from)?;
    if let Some(path) = config.loaded_from() {
        output::debug(format!("loaded config from {}", path.display()), verbosity);
    }

    let mapping = provider_mapping(&config, &cli.github_domains, &cli.gitlab_domains)
        .map_err(ResolveError::from)?;

    let request = ResolveRequest {
        target,
        branch: cli.branch.clone(),
    };
    let url = engine::resolve(&request, &mapping, &GitCli::new(), verbosity)?;
    output::print(&url, verbosity);

    if cli.open().unwrap_or_else(|| config.open()) {
        output::debug("opening browser", verbosity);
        open::that(&url).map_err(|source| CliError::Browser {
            url: url.clone(),
            source,
        })?;
    }

    Ok(())
}

/// Build the provider mapping for one run.
///
/// Built-in hosts first, then the config file, then `--github-domain`,
/// then `--gitlab-domain`. Later registrations win.
///
/// # Errors
///
/// Returns [`ForgeError::UnknownProvider`] if the config file maps a host
/// to an unknown provider tag.
pub fn provider_mapping(
    config: &Config,
    github_domains: &[String],
    gitlab_domains: &[String],
) -> Result<ProviderMapping, ForgeError> {
    let mut mapping = ProviderMapping::default();
    config.global.register_domains(&mut mapping)?;
    mapping.extend(github_domains, ForgeProvider::GitHub);
    mapping.extend(gitlab_domains, ForgeProvider::GitLab);
    Ok(mapping)
}
