//! Git error types.

use thiserror::Error;

/// Git-related errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git ran but exited unsuccessfully.
    #[error("git ({status}): {stderr}")]
    Failed {
        /// Exit status description, e.g. `exit status 128`.
        status: String,
        /// Captured standard error of the git process.
        stderr: String,
    },

    /// No tag matched the lookup.
    #[error("git tag not found")]
    TagNotFound,

    /// Git could not be invoked at all.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for git operations.
pub type GitResult<T> = Result<T, GitError>;
