//! CLI definition.

use anyhow::Result;
use clap::Parser;

use crate::commands;

/// Print the changelog of a plugin from its conventional commits.
#[derive(Debug, Parser)]
#[command(name = "plugin-changelog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(flatten)]
    pub changelog: commands::changelog::ChangelogArgs,
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        commands::changelog::run(self.changelog)
    }
}
