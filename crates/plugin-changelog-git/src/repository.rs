//! Repository queries built on top of a [`GitRunner`].

use tracing::debug;

use crate::{GitError, GitResult, GitRunner, RevisionRange, SystemGit};

/// A Git repository queried through the `git` command line.
#[derive(Debug, Clone)]
pub struct Repository<R = SystemGit> {
    git: R,
}

impl<R: GitRunner> Repository<R> {
    /// Wraps a git runner.
    pub fn new(git: R) -> Self {
        Self { git }
    }

    /// Returns the underlying runner.
    pub fn runner(&self) -> &R {
        &self.git
    }

    /// Returns the most recent tag reachable from `HEAD` starting with `prefix`.
    ///
    /// An empty prefix matches any tag.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::TagNotFound`] if git prints nothing, or the
    /// invocation error otherwise.
    pub fn latest_tag(&self, prefix: &str) -> GitResult<String> {
        let pattern = format!("{prefix}*");
        let mut args = vec!["describe", "--tags", "--abbrev=0"];
        if !prefix.is_empty() {
            args.extend(["--match", pattern.as_str()]);
        }

        let tags = self.git.run(&args)?;
        match tags.into_iter().next() {
            Some(tag) if !tag.is_empty() => {
                debug!(%tag, "latest tag");
                Ok(tag)
            }
            _ => Err(GitError::TagNotFound),
        }
    }

    /// Lists `<short-hash> <subject>` lines for the commits in a range,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns the invocation error if git fails.
    pub fn list_commits(&self, range: &RevisionRange) -> GitResult<Vec<String>> {
        let arg = range.to_arg();
        let mut args = vec!["log"];
        if let Some(arg) = arg.as_deref() {
            args.push(arg);
        }
        args.push("--oneline");

        let commits = self.git.run(&args)?;
        debug!(%range, count = commits.len(), "listed commits");
        Ok(commits)
    }
}
