//! Application configuration sections

use std::path::PathBuf;

use handwave_engine::{EngineConfig, ScreenSize};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Complete configuration for the `handwave` binary
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Gesture thresholds, smoothing and cooldowns
    pub engine: EngineConfig,
    pub screen: ScreenConfig,
    pub input: InputConfig,
    pub executor: ExecutorConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Target screen resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        let size = ScreenSize::default();
        Self {
            width: size.width,
            height: size.height,
        }
    }
}

impl ScreenConfig {
    pub fn size(&self) -> ScreenSize {
        ScreenSize::new(self.width, self.height)
    }
}

/// Frame source settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Flip incoming frames horizontally (x becomes 1 - x)
    pub mirror: bool,
    /// Tick interval of the scripted demo source, in milliseconds
    pub demo_frame_interval_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            mirror: true,
            demo_frame_interval_ms: 33,
        }
    }
}

/// Action executor settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutorConfig {
    /// Wheel units per scroll gesture
    pub scroll_units: i32,
    /// Time between media key down and key up, in milliseconds
    pub media_key_hold_ms: u64,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            scroll_units: 300,
            media_key_hold_ms: 30,
        }
    }
}

/// Terminal mini display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Redraw interval in milliseconds
    pub refresh_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { refresh_ms: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Log file used while the terminal display is active
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// Validate every section; engine checks are delegated to the engine
    pub fn validate(&self) -> Result<()> {
        self.engine.validate()?;

        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::InvalidField {
                field: "screen",
                reason: format!(
                    "width and height must be non-zero, got {}x{}",
                    self.screen.width, self.screen.height
                ),
            });
        }
        if self.input.demo_frame_interval_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "input.demo_frame_interval_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.executor.scroll_units == 0 {
            return Err(ConfigError::InvalidField {
                field: "executor.scroll_units",
                reason: "must be non-zero".to_string(),
            });
        }
        if self.display.refresh_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "display.refresh_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "logging.level",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.input.mirror);
        assert_eq!(config.executor.scroll_units, 300);
        assert_eq!(config.screen.size(), ScreenSize::new(1920, 1080));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [engine]
            cursor_smoothing = 0.22

            [engine.cooldowns]
            click = 0.8

            [screen]
            width = 2560
            "#,
        )
        .unwrap();

        assert_eq!(config.engine.cursor_smoothing, 0.22);
        assert_eq!(config.engine.cooldowns.click, 0.8);
        assert_eq!(config.engine.cooldowns.swipe, 1.0);
        assert_eq!(config.screen.width, 2560);
        assert_eq!(config.screen.height, 1080);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_engine_errors_surface_as_invalid() {
        let mut config = AppConfig::default();
        config.engine.cursor_smoothing = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_screen_rejected() {
        let mut config = AppConfig::default();
        config.screen.height = 0;
        match config.validate() {
            Err(ConfigError::InvalidField { field, .. }) => assert_eq!(field, "screen"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.logging.file = Some(PathBuf::from("/tmp/handwave.log"));
        let text = config.to_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
