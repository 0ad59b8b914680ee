//! Core library for plugin-changelog.
//!
//! This crate resolves the commit range for a plugin, lists the commits in it
//! and keeps the ones whose conventional-commit scope names the plugin.

mod error;
mod filter;
mod generator;
mod options;

pub use error::{CoreError, CoreResult};
pub use filter::ScopeFilter;
pub use generator::{Changelog, ChangelogGenerator};
pub use options::ChangelogOptions;
