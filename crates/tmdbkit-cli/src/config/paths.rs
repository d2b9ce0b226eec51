//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Directory name under the XDG config home.
const APP_DIR: &str = "tmdbkit";
/// File name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// Lookup order:
/// 1. `{dir}/config.toml` when `--dir` is given.
/// 2. `$XDG_CONFIG_HOME/tmdbkit/config.toml` when it is set to an absolute path.
/// 3. `$HOME/.config/tmdbkit/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is usable.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    resolve_config_path_with(dir, |name| std::env::var_os(name).map(PathBuf::from))
}

fn resolve_config_path_with(
    dir: Option<&PathBuf>,
    env: impl Fn(&str) -> Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(CONFIG_FILE));
    }

    // Relative values are invalid per the XDG base directory rules.
    let usable = |path: PathBuf| path.is_absolute().then_some(path);

    if let Some(config_home) = env("XDG_CONFIG_HOME").and_then(usable) {
        return Ok(app_config_file(&config_home));
    }
    if let Some(home) = env("HOME").filter(|home| !home.as_os_str().is_empty()) {
        return Ok(app_config_file(&home.join(".config")));
    }
    bail!("cannot locate the config file: set HOME or XDG_CONFIG_HOME, or pass --dir")
}

fn app_config_file(config_home: &Path) -> PathBuf {
    config_home.join(APP_DIR).join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn env_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<PathBuf> {
        move |name: &str| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| PathBuf::from(value))
        }
    }

    #[test]
    fn test_dir_overrides_environment() {
        // Arrange
        let dir = PathBuf::from("/srv/tmdbkit");
        let env = env_from(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/user")]);

        // Act
        let path = resolve_config_path_with(Some(&dir), env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/srv/tmdbkit/config.toml"));
    }

    #[test]
    fn test_xdg_config_home_before_home() {
        // Arrange
        let env = env_from(&[("XDG_CONFIG_HOME", "/xdg"), ("HOME", "/home/user")]);

        // Act
        let path = resolve_config_path_with(None, env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/tmdbkit/config.toml"));
    }

    #[test]
    fn test_relative_xdg_config_home_is_ignored() {
        // Arrange
        let env = env_from(&[("XDG_CONFIG_HOME", "relative/cfg"), ("HOME", "/home/user")]);

        // Act
        let path = resolve_config_path_with(None, env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/user/.config/tmdbkit/config.toml"));
    }

    #[test]
    fn test_no_home_fails() {
        // Arrange
        let env = env_from(&[("HOME", "")]);

        // Act
        let err = resolve_config_path_with(None, env).unwrap_err();

        // Assert
        assert!(err.to_string().contains("pass --dir"));
    }
}
