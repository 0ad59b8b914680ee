//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Git invocation configuration.
    #[serde(default)]
    pub git: GitConfig,

    /// Changelog configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Git invocation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitConfig {
    /// Executable name or path.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    "git".to_string()
}

/// Changelog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Range end used when none is given on the command line.
    #[serde(default = "default_to")]
    pub to: String,

    /// Separator between the plugin name and the version in tag names
    /// (`k8saudit-0.5.0`).
    #[serde(default = "default_tag_separator")]
    pub tag_separator: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            to: default_to(),
            tag_separator: default_tag_separator(),
        }
    }
}

fn default_to() -> String {
    "HEAD".to_string()
}

fn default_tag_separator() -> String {
    "-".to_string()
}
