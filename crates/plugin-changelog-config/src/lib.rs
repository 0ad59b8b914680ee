//! Configuration management for plugin-changelog.
//!
//! This crate handles loading the optional `changelog.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_and_load_config_from, find_config_file, load_config,
    load_config_or_default,
};
pub use schema::{ChangelogConfig, Config, GitConfig};
