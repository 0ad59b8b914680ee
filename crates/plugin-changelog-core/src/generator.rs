//! Changelog generation.

use std::fmt;

use plugin_changelog_git::{GitRunner, Repository, RevisionRange};
use tracing::{debug, info, warn};

use crate::{ChangelogOptions, CoreResult, ScopeFilter};

/// The commit lines selected for a changelog, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    entries: Vec<String>,
}

impl Changelog {
    /// Returns the selected commit lines.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Returns true if no commit was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<String>> for Changelog {
    fn from(entries: Vec<String>) -> Self {
        Self { entries }
    }
}

/// Renders one `* <commit-line>` bullet per line.
impl fmt::Display for Changelog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "* {entry}")?;
        }
        Ok(())
    }
}

/// Generates changelogs from a repository.
pub struct ChangelogGenerator<R: GitRunner> {
    repo: Repository<R>,
}

impl<R: GitRunner> ChangelogGenerator<R> {
    /// Creates a generator over the given repository.
    pub fn new(repo: Repository<R>) -> Self {
        Self { repo }
    }

    /// Returns the range to list commits from.
    ///
    /// Without an explicit start, the latest tag carrying the plugin's prefix
    /// is used. If there is none, the whole history is listed.
    pub fn resolve_range(&self, options: &ChangelogOptions) -> RevisionRange {
        if !options.from.is_empty() {
            return RevisionRange::new(&options.from, &options.to);
        }

        let prefix = options.tag_prefix();
        match self.repo.latest_tag(&prefix) {
            Ok(tag) => {
                debug!(%tag, "starting from latest tag");
                RevisionRange::new(&tag, &options.to)
            }
            Err(err) => {
                warn!(
                    "no tag with prefix '{prefix}' found, using commits from whole history: {err}"
                );
                RevisionRange::new("", &options.to)
            }
        }
    }

    /// Lists the commits in range and keeps those belonging to the plugin.
    ///
    /// # Errors
    ///
    /// Returns an error if git fails to list commits. Tag lookup failures are
    /// not errors, see [`Self::resolve_range`].
    pub fn generate(&self, options: &ChangelogOptions) -> CoreResult<Changelog> {
        let range = self.resolve_range(options);
        let commits = self.repo.list_commits(&range)?;

        let filter = ScopeFilter::new(&options.plugin)?;
        let entries: Vec<String> = commits
            .into_iter()
            .filter(|line| filter.matches(line))
            .collect();

        info!(
            plugin = %options.plugin,
            %range,
            count = entries.len(),
            "generated changelog"
        );

        Ok(Changelog { entries })
    }
}
