//! Git invocation layer for plugin-changelog.
//!
//! This crate shells out to the `git` executable:
//! - Command execution behind the [`GitRunner`] capability
//! - Latest tag lookup
//! - One-line commit listing over a revision range

mod error;
mod range;
mod repository;
mod runner;

pub use error::{GitError, GitResult};
pub use range::RevisionRange;
pub use repository::Repository;
pub use runner::{GitRunner, SystemGit};
