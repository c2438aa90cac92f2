//! Locating and loading configuration files
//!
//! Resolution order: explicit path (command line), the `HANDWAVE_CONFIG`
//! environment variable, `config.toml` in the platform config directory, and
//! finally built-in defaults. Explicit paths must exist; the platform file is
//! optional.

use std::fmt;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::app_config::AppConfig;
use crate::error::{ConfigError, Result};

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "HANDWAVE_CONFIG";

/// File name inside the platform config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    PlatformDir(PathBuf),
    Defaults,
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Flag(path) | ConfigSource::Env(path) | ConfigSource::PlatformDir(path) => {
                Some(path.as_path())
            }
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag(path) => write!(f, "{} (--config)", path.display()),
            ConfigSource::Env(path) => write!(f, "{} (${})", path.display(), CONFIG_ENV),
            ConfigSource::PlatformDir(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => f.write_str("built-in defaults"),
        }
    }
}

/// A validated configuration and its origin
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub source: ConfigSource,
}

/// Resolves and reads the application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    explicit: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `path` ahead of every other source
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            explicit: Some(path.into()),
        }
    }

    /// Decide which source to read, without reading it
    pub fn resolve(&self) -> ConfigSource {
        if let Some(path) = &self.explicit {
            return ConfigSource::Flag(path.clone());
        }

        if let Some(value) = std::env::var_os(CONFIG_ENV) {
            if !value.is_empty() {
                return ConfigSource::Env(PathBuf::from(value));
            }
        }

        match Self::default_path() {
            Ok(path) if path.is_file() => ConfigSource::PlatformDir(path),
            Ok(_) => ConfigSource::Defaults,
            Err(_) => {
                tracing::debug!("no platform config directory; using defaults");
                ConfigSource::Defaults
            }
        }
    }

    /// Resolve, read and validate
    pub fn load(&self) -> Result<LoadedConfig> {
        let loaded = self.read()?;
        loaded.config.validate()?;
        Ok(loaded)
    }

    /// Resolve and parse without validating, so the caller can layer
    /// overrides before checking values
    pub fn read(&self) -> Result<LoadedConfig> {
        let source = self.resolve();
        let config = match source.path() {
            Some(path) => Self::read_file(path)?,
            None => AppConfig::default(),
        };
        Ok(LoadedConfig { config, source })
    }

    /// Read and validate one TOML file
    pub fn load_file(path: &Path) -> Result<AppConfig> {
        let config = Self::read_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: AppConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Write the default configuration to `path`, creating parent directories
    pub fn write_default(path: &Path) -> Result<()> {
        let content = AppConfig::default().to_toml()?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "wrote default configuration");
        Ok(())
    }

    /// `config.toml` inside the platform config directory
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "handwave")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(ConfigError::NoConfigDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        ConfigLoader::write_default(&path).unwrap();
        let config = ConfigLoader::load_file(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "custom.toml", "[screen]\nwidth = 800\nheight = 600\n");

        let loaded = ConfigLoader::with_path(&path).load().unwrap();
        assert_eq!(loaded.source, ConfigSource::Flag(path));
        assert_eq!(loaded.config.screen.width, 800);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::with_path(dir.path().join("absent.toml")).load();
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.toml", "[engine\ncursor_smoothing = ");

        let err = ConfigLoader::load_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.toml", "[engine.swipe]\nhistory_len = 1\n");
        assert!(matches!(
            ConfigLoader::load_file(&path),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_read_leaves_validation_to_caller() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bad.toml", "[engine]\ncursor_smoothing = 0.0\n");
        let loader = ConfigLoader::with_path(&path);

        let loaded = loader.read().unwrap();
        assert_eq!(loaded.config.engine.cursor_smoothing, 0.0);
        assert!(loader.load().is_err());
    }

    #[test]
    #[serial]
    fn test_env_var_used_without_flag() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "env.toml", "[executor]\nscroll_units = 120\n");

        std::env::set_var(CONFIG_ENV, &path);
        let loaded = ConfigLoader::new().load();
        std::env::remove_var(CONFIG_ENV);

        let loaded = loaded.unwrap();
        assert_eq!(loaded.source, ConfigSource::Env(path));
        assert_eq!(loaded.config.executor.scroll_units, 120);
    }

    #[test]
    #[serial]
    fn test_flag_beats_env_var() {
        let dir = TempDir::new().unwrap();
        let env_path = write(&dir, "env.toml", "[display]\nrefresh_ms = 10\n");
        let flag_path = write(&dir, "flag.toml", "[display]\nrefresh_ms = 20\n");

        std::env::set_var(CONFIG_ENV, &env_path);
        let loaded = ConfigLoader::with_path(&flag_path).load();
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(loaded.unwrap().config.display.refresh_ms, 20);
    }

    #[test]
    #[serial]
    fn test_empty_env_var_ignored() {
        std::env::set_var(CONFIG_ENV, "");
        let source = ConfigLoader::new().resolve();
        std::env::remove_var(CONFIG_ENV);

        assert!(!matches!(source, ConfigSource::Env(_)));
    }
}
