//! handwave-app: desktop control from hand landmark streams
//!
//! Wires a frame source, the gesture engine and an action executor together
//! on a worker thread, with an optional terminal display on the main thread.

pub mod cli;
pub mod executor;
pub mod handoff;
pub mod hud;
pub mod logging;
pub mod source;
pub mod worker;

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::Context;
use handwave_config::AppConfig;
use handwave_engine::GestureEngine;

use cli::Cli;
use executor::DryRunExecutor;
use handoff::feed;
use hud::Hud;
use source::{FrameSource, JsonLinesSource, ScriptedSource};
use worker::{SessionControls, Worker, WorkerStats};

/// How long to wait for a worker blocked on input after the display quits
const WORKER_GRACE: Duration = Duration::from_millis(500);

fn build_source(cli: &Cli, config: &AppConfig) -> anyhow::Result<Box<dyn FrameSource>> {
    if cli.demo {
        let interval = Duration::from_millis(config.input.demo_frame_interval_ms);
        let source = ScriptedSource::demo(interval)
            .looping(!cli.headless)
            .paced(true);
        return Ok(Box::new(source));
    }

    match cli.input_path() {
        Some(path) => Ok(Box::new(JsonLinesSource::open(path, config.input.mirror)?)),
        None => Ok(Box::new(JsonLinesSource::stdin(config.input.mirror))),
    }
}

/// Run one session with a validated configuration
pub fn run(cli: &Cli, config: AppConfig) -> anyhow::Result<()> {
    let engine = GestureEngine::new(config.engine.clone(), config.screen.size())
        .context("Invalid engine configuration")?;
    let source = build_source(cli, &config)?;
    let executor = DryRunExecutor::new(Duration::from_millis(config.executor.media_key_hold_ms));

    let (publisher, subscriber) = feed();
    let controls = SessionControls::new();

    let handle = Worker::new(
        engine,
        source,
        Box::new(executor),
        publisher,
        controls.clone(),
    )
    .with_scroll_units(config.executor.scroll_units)
    .spawn()?;

    if cli.headless {
        drop(subscriber);
        let stats = join_worker(handle)?;
        report(&stats);
        return Ok(());
    }

    let mut hud = Hud::new(subscriber, controls.clone())
        .with_refresh(Duration::from_millis(config.display.refresh_ms));
    let hud_result = hud.run().context("Terminal display failed");

    controls.request_stop();
    let deadline = Instant::now() + WORKER_GRACE;
    while !handle.is_finished() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }
    if handle.is_finished() {
        report(&join_worker(handle)?);
    } else {
        tracing::warn!("worker still waiting for input; exiting without it");
    }

    hud_result
}

fn join_worker(handle: JoinHandle<anyhow::Result<WorkerStats>>) -> anyhow::Result<WorkerStats> {
    handle
        .join()
        .map_err(|_| anyhow::anyhow!("Gesture worker panicked"))?
}

fn report(stats: &WorkerStats) {
    for (label, count) in &stats.gestures {
        tracing::info!(gesture = *label, count, "gesture summary");
    }
    if stats.action_errors > 0 {
        tracing::warn!(errors = stats.action_errors, "some actions failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use handwave_engine::poses;
    use std::io::Write;

    #[test]
    fn test_demo_flag_selects_scripted_source() {
        let cli = Cli::parse_from(["handwave", "--demo", "--headless"]);
        let source = build_source(&cli, &AppConfig::default()).unwrap();
        assert_eq!(source.name(), "demo");
    }

    #[test]
    fn test_missing_input_file_fails() {
        let cli = Cli::parse_from(["handwave", "-i", "/nonexistent/frames.jsonl"]);
        let err = build_source(&cli, &AppConfig::default()).err().unwrap();
        assert!(err.to_string().contains("frames.jsonl"));
    }

    #[test]
    fn test_headless_session_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let pairs: Vec<[f64; 2]> = poses::pinch().points().iter().map(|p| [p.x, p.y]).collect();
        let landmarks = serde_json::to_string(&pairs).unwrap();
        for i in 0..5 {
            writeln!(file, "{{\"t\": {}, \"landmarks\": {}}}", i as f64 * 0.1, landmarks).unwrap();
        }
        writeln!(file, "{{\"t\": 0.6}}").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let cli = Cli::parse_from(["handwave", "--headless", "-i", path.as_str()]);
        run(&cli, AppConfig::default()).unwrap();
    }
}
