//! gitopener binary entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    gitopener::cli::run()
}
