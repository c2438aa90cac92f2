//! handwave-config: configuration management for handwave
//!
//! Loads [`AppConfig`] from TOML, layering an explicit path, the
//! `HANDWAVE_CONFIG` environment variable and the platform config directory
//! over built-in defaults.

pub mod app_config;
pub mod error;
pub mod loader;

pub use app_config::{
    AppConfig, DisplayConfig, ExecutorConfig, InputConfig, LoggingConfig, ScreenConfig,
};
pub use error::{ConfigError, Result};
pub use loader::{ConfigLoader, ConfigSource, LoadedConfig, CONFIG_ENV, CONFIG_FILE};
