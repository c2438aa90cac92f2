//! handwave
//!
//! Reads hand landmark frames (21 points per frame, one JSON object per line)
//! and turns them into pointer, click, scroll and media-key actions.
//!
//! Controls:
//! - S or Space: Start/Stop
//! - R: Restart the session
//! - Q or Esc: Quit
//!
//! Usage:
//!   handwave --demo                      # Built-in gesture tour
//!   landmarker | handwave                # Frames on stdin
//!   handwave -i frames.jsonl --headless  # No display, logs on stderr
//!   handwave --init-config config.toml   # Write a default config

use clap::Parser;
use handwave_app::cli::Cli;
use handwave_config::ConfigLoader;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.init_config {
        ConfigLoader::write_default(path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let loaded = cli.load_config()?;
    handwave_app::logging::init(&loaded.config.logging, cli.headless)?;
    tracing::info!(source = %loaded.source, "configuration loaded");

    handwave_app::run(&cli, loaded.config)
}
