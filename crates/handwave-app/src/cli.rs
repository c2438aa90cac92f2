//! Command-line interface

use std::path::{Path, PathBuf};

use clap::Parser;
use handwave_config::{AppConfig, ConfigLoader, LoadedConfig};
use handwave_engine::ScreenSize;

/// handwave - control the desktop with hand gestures
#[derive(Parser, Debug)]
#[command(name = "handwave")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON-lines landmark stream ("-" for stdin, the default)
    #[arg(short, long, value_name = "PATH", conflicts_with = "demo")]
    pub input: Option<PathBuf>,

    /// Replay a built-in tour of every gesture instead of reading input
    #[arg(long)]
    pub demo: bool,

    /// Run without the terminal display and log to stderr
    #[arg(long)]
    pub headless: bool,

    /// Screen resolution, e.g. 1920x1080
    #[arg(long, value_name = "WxH", value_parser = parse_screen)]
    pub screen: Option<ScreenSize>,

    /// Cursor smoothing factor in (0, 1]
    #[arg(long, value_name = "ALPHA")]
    pub smoothing: Option<f64>,

    /// Write a default config file to PATH and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(screen) = self.screen {
            config.screen.width = screen.width;
            config.screen.height = screen.height;
        }
        if let Some(smoothing) = self.smoothing {
            config.engine.cursor_smoothing = smoothing;
        }
    }

    /// Resolve the config file, layer command-line overrides and validate
    pub fn load_config(&self) -> anyhow::Result<LoadedConfig> {
        let loader = match &self.config {
            Some(path) => ConfigLoader::with_path(path),
            None => ConfigLoader::new(),
        };
        let mut loaded = loader.read()?;
        self.apply_overrides(&mut loaded.config);
        loaded.config.validate()?;
        Ok(loaded)
    }

    /// Input path, `None` meaning stdin
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Parse `WIDTHxHEIGHT`
pub fn parse_screen(value: &str) -> Result<ScreenSize, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", value))?;

    let width: u32 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{}'", width))?;
    let height: u32 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{}'", height))?;

    if width == 0 || height == 0 {
        return Err("screen dimensions must be non-zero".to_string());
    }
    Ok(ScreenSize::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_screen() {
        assert_eq!(parse_screen("2560x1440"), Ok(ScreenSize::new(2560, 1440)));
        assert_eq!(parse_screen("800X600"), Ok(ScreenSize::new(800, 600)));
        assert!(parse_screen("800").is_err());
        assert!(parse_screen("0x600").is_err());
        assert!(parse_screen("axb").is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["handwave", "--screen", "1280x720", "--smoothing", "0.22"]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.screen.width, 1280);
        assert_eq!(config.screen.height, 720);
        assert_eq!(config.engine.cursor_smoothing, 0.22);
    }

    #[test]
    fn test_smoothing_flag_overrides_bad_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"[engine]\ncursor_smoothing = 0.0\n").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = Cli::parse_from(["handwave", "-c", path.as_str()]);
        assert!(cli.load_config().is_err());

        let cli = Cli::parse_from(["handwave", "-c", path.as_str(), "--smoothing", "0.2"]);
        let loaded = cli.load_config().unwrap();
        assert_eq!(loaded.config.engine.cursor_smoothing, 0.2);
    }

    #[test]
    fn test_stdin_dash() {
        let cli = Cli::parse_from(["handwave", "--input", "-"]);
        assert!(cli.input_path().is_none());

        let cli = Cli::parse_from(["handwave", "-i", "frames.jsonl", "--headless"]);
        assert_eq!(cli.input_path(), Some(Path::new("frames.jsonl")));
        assert!(cli.headless);
    }

    #[test]
    fn test_demo_conflicts_with_input() {
        let result = Cli::try_parse_from(["handwave", "--demo", "--input", "x.jsonl"]);
        assert!(result.is_err());
    }
}
