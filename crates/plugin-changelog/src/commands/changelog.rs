//! Changelog command.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use plugin_changelog_config::{Config, load_config, load_config_or_default};
use plugin_changelog_core::{Changelog, ChangelogGenerator, ChangelogOptions};
use plugin_changelog_git::{Repository, SystemGit};

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Name of the plugin to generate the changelog for
    #[arg(long, env = "CHANGELOG_PLUGIN", default_value = "")]
    pub plugin: String,

    /// Tag/branch/hash from which start listing commits
    #[arg(long, env = "CHANGELOG_FROM", default_value = "")]
    pub from: String,

    /// Tag/branch/hash to which stop listing commits [default: HEAD]
    #[arg(long, env = "CHANGELOG_TO")]
    pub to: Option<String>,

    /// Run git in this repository directory instead of the current one
    #[arg(short = 'C', long)]
    pub repo: Option<PathBuf>,

    /// Configuration file (default: nearest changelog.toml)
    #[arg(long, env = "CHANGELOG_CONFIG")]
    pub config: Option<PathBuf>,
}

impl ChangelogArgs {
    fn resolve_config(&self) -> Result<Config> {
        if let Some(path) = &self.config {
            return load_config(path)
                .with_context(|| format!("failed to load configuration {}", path.display()));
        }

        let start_dir = match &self.repo {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("failed to get current directory")?,
        };
        load_config_or_default(&start_dir).context("failed to load configuration")
    }
}

/// Runs the changelog command.
pub fn run(args: ChangelogArgs) -> Result<()> {
    let config = args.resolve_config()?;
    debug!(?config, "resolved configuration");

    let mut git = SystemGit::with_program(config.git.program);
    if let Some(dir) = args.repo {
        git = git.workdir(dir);
    }

    let options = ChangelogOptions::new()
        .plugin(args.plugin)
        .from(args.from)
        .to(args.to.unwrap_or(config.changelog.to))
        .tag_separator(config.changelog.tag_separator);

    let changelog = ChangelogGenerator::new(Repository::new(git)).generate(&options)?;

    write_changelog(&mut std::io::stdout().lock(), &changelog)?;

    Ok(())
}

/// Writes the changelog, treating a closed reader (`| head`) as success.
fn write_changelog(out: &mut impl Write, changelog: &Changelog) -> io::Result<()> {
    match write!(out, "{changelog}").and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed, changelog truncated");
            Ok(())
        }
        other => other,
    }
}
