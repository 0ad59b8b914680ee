//! Git command execution.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, info};

use crate::{GitError, GitResult};

/// Runs git with the given arguments and returns its stdout, one entry per line.
///
/// Implemented by [`SystemGit`] for real invocations and by test fakes.
pub trait GitRunner {
    /// Runs git.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::Failed`] on a non-zero exit, or [`GitError::Io`] if
    /// git could not be started.
    fn run(&self, args: &[&str]) -> GitResult<Vec<String>>;
}

impl<T: GitRunner + ?Sized> GitRunner for &T {
    fn run(&self, args: &[&str]) -> GitResult<Vec<String>> {
        (**self).run(args)
    }
}

/// Invokes the git executable found on the system.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Creates a runner for the `git` executable on `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Creates a runner for a specific executable name or path.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            workdir: None,
        }
    }

    /// Runs git from the given directory instead of the current one.
    #[must_use]
    pub fn workdir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Returns the executable this runner invokes.
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Returns the directory git runs in, if overridden.
    #[must_use]
    pub fn dir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, args: &[&str]) -> GitResult<Vec<String>> {
        info!("{} {}", self.program, args.join(" "));

        let mut command = Command::new(&self.program);
        command.args(args);
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output()?;
        if !output.status.success() {
            return Err(GitError::Failed {
                status: describe_status(output.status),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<String> = stdout.lines().map(String::from).collect();
        debug!(lines = lines.len(), "git finished");
        Ok(lines)
    }
}

fn describe_status(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit status {code}"),
        None => status.to_string(),
    }
}
