//! Conventional-commit scope filter.

use regex::Regex;

use crate::CoreResult;

/// Selects `git log --oneline` lines whose conventional-commit scope names a
/// plugin.
///
/// With a plugin name `json`, the following lines match:
///
/// ```text
/// 1a2b3c4 feat(json): ...
/// 1a2b3c4 fix(plugins/json): ...
/// 1a2b3c4 docs(plugins/json/readme): ...
/// ```
///
/// Empty lines never match.
#[derive(Debug, Clone, Default)]
pub struct ScopeFilter {
    pattern: Option<Regex>,
}

impl ScopeFilter {
    /// Builds the filter for a plugin. An empty name lets every line through.
    ///
    /// The name is matched literally.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting pattern does not compile.
    pub fn new(plugin: &str) -> CoreResult<Self> {
        if plugin.is_empty() {
            return Ok(Self::default());
        }

        let pattern = Regex::new(&format!(
            r"^[a-f0-9]{{7}} [a-zA-Z]+\(([a-zA-Z/]+/)?{}(/[a-zA-Z/]+)?\):.*",
            regex::escape(plugin)
        ))?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns true if lines are filtered by scope.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Returns true if the commit line belongs in the changelog.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        if line.is_empty() {
            return false;
        }
        self.pattern.as_ref().is_none_or(|re| re.is_match(line))
    }
}
