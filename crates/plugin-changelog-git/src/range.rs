//! Revision ranges passed to `git log`.

use std::fmt;

/// Which commits `git log` should walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisionRange {
    /// The whole history reachable from `HEAD`.
    All,
    /// Every ancestor of a single revision.
    Until(String),
    /// Commits reachable from `to` but not from `from`.
    Between {
        /// Exclusive start.
        from: String,
        /// Inclusive end.
        to: String,
    },
}

impl RevisionRange {
    /// Builds a range from optional endpoints; empty strings mean "unset".
    ///
    /// A start without an end is bounded by `HEAD`.
    #[must_use]
    pub fn new(from: &str, to: &str) -> Self {
        match (from.is_empty(), to.is_empty()) {
            (true, true) => Self::All,
            (true, false) => Self::Until(to.to_string()),
            (false, true) => Self::Between {
                from: from.to_string(),
                to: "HEAD".to_string(),
            },
            (false, false) => Self::Between {
                from: from.to_string(),
                to: to.to_string(),
            },
        }
    }

    /// Returns the argument to hand to git, if any.
    #[must_use]
    pub fn to_arg(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Until(to) => Some(to.clone()),
            Self::Between { from, to } => Some(format!("{from}..{to}")),
        }
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_arg() {
            Some(arg) => f.write_str(&arg),
            None => f.write_str("<whole history>"),
        }
    }
}
