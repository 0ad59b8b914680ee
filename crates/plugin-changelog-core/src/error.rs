//! Core error types.

use thiserror::Error;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Git error.
    #[error(transparent)]
    Git(#[from] plugin_changelog_git::GitError),

    /// The commit filter could not be compiled.
    #[error("invalid commit filter")]
    Filter(#[from] regex::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use plugin_changelog_git::GitError;

    #[test]
    fn test_git_error_is_transparent() {
        let err = CoreError::from(GitError::Failed {
            status: "exit status 128".to_string(),
            stderr: "fatal: bad revision 'nope..HEAD'\n".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "git (exit status 128): fatal: bad revision 'nope..HEAD'\n"
        );
    }

    #[test]
    fn test_filter_error_display() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let details = regex_err.to_string();
        let err = CoreError::from(regex_err);
        assert_eq!(err.to_string(), "invalid commit filter");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some(details)
        );
    }
}
