//! Tracing subscriber setup
//!
//! `RUST_LOG` wins over the configured level. Headless runs log to stderr.
//! While the terminal display is up, logs go to the configured file or
//! nowhere.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use handwave_config::LoggingConfig;
use tracing_subscriber::EnvFilter;

fn filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

pub fn init(config: &LoggingConfig, headless: bool) -> anyhow::Result<()> {
    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter(config))
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter(config))
                .with_writer(std::io::sink)
                .init();
        }
    }
    Ok(())
}
