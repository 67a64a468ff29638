//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! Every option can also be set through a `GITOPENER_*` environment
//! variable (the upper-cased flag name). A flag given on the command line
//! beats the environment. List-valued variables are comma separated.

use clap::builder::FalseyValueParser;
use clap::Parser;

/// Print the web URL of a file in a GitHub or GitLab repository
#[derive(Parser, Debug)]
#[command(name = "gitopener")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Link to a file on the current branch
    gitopener src/main.rs

    # Link to line 42 on a specific branch
    gitopener --branch release-1.4 src/main.rs:42

    # A self-managed GitLab
    gitopener --gitlab-domain gitlab.example.com lib/x.rb:17")]
pub struct Cli {
    /// File to link to, optionally followed by :LINE
    #[arg(value_name = "FILE[:LINE]")]
    pub file: Option<String>,

    /// The branch to use when viewing the file. Defaults to the current working branch
    #[arg(long, env = "GITOPENER_BRANCH", value_name = "NAME")]
    pub branch: Option<String>,

    /// Treat this domain as a GitHub instance. Can be specified more than once
    #[arg(
        long = "github-domain",
        env = "GITOPENER_GITHUB_DOMAIN",
        value_name = "HOST",
        value_delimiter = ','
    )]
    pub github_domains: Vec<String>,

    /// Treat this domain as a GitLab instance. Can be specified more than once
    #[arg(
        long = "gitlab-domain",
        env = "GITOPENER_GITLAB_DOMAIN",
        value_name = "HOST",
        value_delimiter = ','
    )]
    pub gitlab_domains: Vec<String>,

    /// Also open the URL in the default browser
    #[arg(
        long = "open",
        env = "GITOPENER_OPEN",
        value_parser = FalseyValueParser::new(),
        conflicts_with = "no_open"
    )]
    pub open_flag: bool,

    /// Never open a browser, even if the config file says so
    #[arg(long)]
    pub no_open: bool,

    /// Do not print the URL
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, env = "GITOPENER_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Print a completion script for SHELL and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Explicit `--open` / `--no-open` choice, if any.
    pub fn open(&self) -> Option<bool> {
        if self.open_flag {
            Some(true)
        } else if self.no_open {
            Some(false)
        } else {
            None
        }
    }
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
