//! Configuration loader.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Config, ConfigError, ConfigResult};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// Loads configuration from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: impl AsRef<Path>) -> ConfigResult<Config> {
    let path = path.as_ref();
    debug!(?path, "loading configuration");

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}

/// Returns the nearest configuration file at or above `start_dir`.
///
/// The search does not leave the repository: it stops at the first directory
/// holding a `.git` entry (a directory, or a file for worktrees and
/// submodules).
pub fn find_config_file(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    for dir in start_dir.as_ref().ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            debug!(root = ?dir, "reached repository root");
            break;
        }
    }
    None
}

/// Finds and loads the repository's configuration, see [`find_config_file`].
///
/// # Errors
///
/// Returns an error if no configuration file is found or it cannot be parsed.
pub fn find_and_load_config_from(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    let start_dir = start_dir.as_ref();
    match find_config_file(start_dir) {
        Some(path) => load_config(path),
        None => Err(ConfigError::NotFound(start_dir.join(CONFIG_FILE_NAME))),
    }
}

/// Like [`find_and_load_config_from`], but falls back to defaults when no
/// file exists.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be read or parsed.
pub fn load_config_or_default(start_dir: impl AsRef<Path>) -> ConfigResult<Config> {
    match find_and_load_config_from(start_dir) {
        Err(ConfigError::NotFound(path)) => {
            debug!(?path, "no configuration file, using defaults");
            Ok(Config::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_file_name() {
        assert_eq!(CONFIG_FILE_NAME, "changelog.toml");
    }

    #[test]
    fn test_load_config_not_found() {
        let result = load_config("/nonexistent/path/changelog.toml");
        match result {
            Err(ConfigError::NotFound(path)) => {
                assert!(path.to_string_lossy().contains("changelog.toml"));
            }
            _ => panic!("Expected NotFound error"),
        }
    }

    #[test]
    fn test_load_config_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "").unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        let result = load_config(&config_path);
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }

    #[test]
    fn test_load_config_custom_values() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"
            [git]
            program = "/opt/git/bin/git"

            [changelog]
            to = "main"
            tag_separator = "/v"
        "#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.git.program, "/opt/git/bin/git");
        assert_eq!(config.changelog.to, "main");
        assert_eq!(config.changelog.tag_separator, "/v");
    }

    #[test]
    fn test_find_and_load_config_in_parent() {
        let parent_dir = TempDir::new().unwrap();
        fs::write(
            parent_dir.path().join(CONFIG_FILE_NAME),
            r#"
            [changelog]
            to = "release"
        "#,
        )
        .unwrap();

        let child_dir = parent_dir.path().join("plugins").join("json");
        fs::create_dir_all(&child_dir).unwrap();

        let config = find_and_load_config_from(&child_dir).unwrap();
        assert_eq!(config.changelog.to, "release");
    }

    #[test]
    fn test_find_config_file_prefers_nearest() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("plugins").join("json");
        fs::create_dir_all(&nested).unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "").unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            find_config_file(&nested),
            Some(nested.join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_find_config_file_stops_at_repository_root() {
        let outer = TempDir::new().unwrap();
        fs::write(outer.path().join(CONFIG_FILE_NAME), "[changelog]\nto = 5\n").unwrap();

        let repo = outer.path().join("repo");
        let subdir = repo.join("plugins");
        fs::create_dir_all(repo.join(".git")).unwrap();
        fs::create_dir_all(&subdir).unwrap();

        assert_eq!(find_config_file(&repo), None);
        assert_eq!(find_config_file(&subdir), None);

        let config = load_config_or_default(&subdir).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_find_config_file_at_repository_root() {
        let repo = TempDir::new().unwrap();
        fs::write(repo.path().join(".git"), "gitdir: ../main/.git/worktrees/repo\n").unwrap();
        fs::write(repo.path().join(CONFIG_FILE_NAME), "").unwrap();

        assert_eq!(
            find_config_file(repo.path()),
            Some(repo.path().join(CONFIG_FILE_NAME))
        );
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = load_config_or_default(temp_dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_or_default_reports_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[git\n").unwrap();

        let result = load_config_or_default(temp_dir.path());
        assert!(matches!(result, Err(ConfigError::InvalidToml(_))));
    }
}
