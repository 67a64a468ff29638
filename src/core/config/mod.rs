//! core::config
//!
//! User configuration file.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults (`github.com`, `gitlab.com`)
//! 2. User config file
//! 3. Environment variables (`GITOPENER_*`, handled by clap)
//! 4. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITOPENER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitopener/config.toml`
//! 3. `~/.gitopener/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitopener::core::config::Config;
//! use gitopener::forge::ProviderMapping;
//!
//! let config = Config::load().unwrap();
//! let mut mapping = ProviderMapping::default();
//! config.global.register_domains(&mut mapping).unwrap();
//! println!("open by default: {}", config.open());
//! ```

pub mod schema;

pub use schema::GlobalConfig;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "GITOPENER_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// User configuration
    pub global: GlobalConfig,
    /// Path to the config file (if loaded)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. A missing config file is not an error.
    pub fn load() -> Result<Config, ConfigError> {
        let candidates = candidate_paths(
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        );

        match candidates.into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let global: GlobalConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        global.validate()?;

        Ok(Config {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// Whether `--open` is on by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn open(&self) -> bool {
        self.global.open.unwrap_or(false)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl From<GlobalConfig> for Config {
    fn from(global: GlobalConfig) -> Self {
        Config { global, path: None }
    }
}

/// Config file candidates in search order.
fn candidate_paths(
    explicit: Option<PathBuf>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(path) = explicit {
        paths.push(path);
    }
    if let Some(xdg) = xdg_config_home {
        paths.push(xdg.join("gitopener/config.toml"));
    }
    if let Some(home) = home {
        paths.push(home.join(".gitopener/config.toml"));
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn candidate_order() {
        let paths = candidate_paths(
            Some(PathBuf::from("/etc/go.toml")),
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/u")),
        );
        assert_eq!(
            paths,
            vec![
                PathBuf::from("/etc/go.toml"),
                PathBuf::from("/xdg/gitopener/config.toml"),
                PathBuf::from("/home/u/.gitopener/config.toml"),
            ]
        );
    }

    #[test]
    fn candidate_order_without_env() {
        let paths = candidate_paths(None, None, Some(PathBuf::from("/home/u")));
        assert_eq!(paths, vec![PathBuf::from("/home/u/.gitopener/config.toml")]);
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            gitlab_domains = ["gitlab.example.com"]
            open = true
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.open());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
        assert_eq!(config.global.gitlab_domains, vec!["gitlab.example.com"]);
    }

    #[test]
    fn default_does_not_open() {
        assert!(!Config::default().open());
        assert!(Config::default().loaded_from().is_none());
    }

    #[test]
    fn parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "github_domains = ").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn invalid_domain_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "github_domains = [\"https://github.corp\"]").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let err = Config::load_from(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
