//! plugin-changelog CLI - Print the changelog of a plugin from its commits.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    // Logs go to stderr, stdout is reserved for the changelog
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // stdout may be gone too; the exit code still reports the failure
            let _ = writeln!(std::io::stdout(), "error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
