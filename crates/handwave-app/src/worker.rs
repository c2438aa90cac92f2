//! The gesture worker thread
//!
//! Pulls frames from a source, runs the engine, dispatches actions and
//! publishes the newest event for the display. The engine state lives on this
//! thread only; the display talks to it through [`SessionControls`].

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::Context;
use handwave_engine::GestureEngine;

use crate::executor::{action_for, ActionExecutor};
use crate::handoff::{FeedPublisher, FeedSnapshot};
use crate::source::FrameSource;

/// Flags the display sets and the worker polls once per frame
#[derive(Debug, Default)]
pub struct SessionControls {
    stop: AtomicBool,
    paused: AtomicBool,
    restart: AtomicBool,
}

impl SessionControls {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.load(Ordering::SeqCst)
    }

    /// Flip between running and paused; returns the new paused state
    pub fn toggle_pause(&self) -> bool {
        !self.paused.fetch_xor(true, Ordering::SeqCst)
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Ask the worker to start a fresh session on its next frame
    pub fn request_restart(&self) {
        self.restart.store(true, Ordering::SeqCst);
    }

    fn take_restart(&self) -> bool {
        self.restart.swap(false, Ordering::SeqCst)
    }
}

/// Counters reported when the worker finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkerStats {
    pub frames: u64,
    pub hand_frames: u64,
    pub actions: u64,
    pub action_errors: u64,
    pub restarts: u64,
    /// Non-idle events by label
    pub gestures: BTreeMap<&'static str, u64>,
}

pub struct Worker {
    engine: GestureEngine,
    source: Box<dyn FrameSource>,
    executor: Box<dyn ActionExecutor>,
    publisher: FeedPublisher,
    controls: Arc<SessionControls>,
    scroll_units: i32,
}

impl Worker {
    pub fn new(
        engine: GestureEngine,
        source: Box<dyn FrameSource>,
        executor: Box<dyn ActionExecutor>,
        publisher: FeedPublisher,
        controls: Arc<SessionControls>,
    ) -> Self {
        Self {
            engine,
            source,
            executor,
            publisher,
            controls,
            scroll_units: 300,
        }
    }

    pub fn with_scroll_units(mut self, units: i32) -> Self {
        self.scroll_units = units;
        self
    }

    /// Run on a dedicated, named thread
    pub fn spawn(self) -> anyhow::Result<JoinHandle<anyhow::Result<WorkerStats>>> {
        thread::Builder::new()
            .name("gesture-worker".to_string())
            .spawn(move || self.run())
            .context("Failed to spawn gesture worker thread")
    }

    /// Process frames until the source ends or a stop is requested
    pub fn run(mut self) -> anyhow::Result<WorkerStats> {
        let mut state = self.engine.new_state();
        let mut stats = WorkerStats::default();

        tracing::info!(
            source = self.source.name(),
            executor = self.executor.name(),
            "gesture session started"
        );

        loop {
            if self.controls.is_stopped() {
                tracing::info!("stop requested");
                break;
            }
            if self.controls.take_restart() {
                state.reset();
                stats.restarts += 1;
                tracing::info!("session restarted");
            }

            let Some(next) = self.source.next_frame()? else {
                tracing::info!(source = self.source.name(), "input ended");
                break;
            };
            stats.frames += 1;

            let frame = if self.controls.is_paused() {
                None
            } else {
                next.frame.as_ref()
            };
            let hand_present = frame.is_some();
            if hand_present {
                stats.hand_frames += 1;
            }

            let event = self.engine.process(&mut state, frame, next.timestamp);
            if !event.is_idle() {
                *stats.gestures.entry(event.label()).or_default() += 1;
            }

            if let Some(action) = action_for(&event, self.scroll_units) {
                match self.executor.execute(&action) {
                    Ok(()) => stats.actions += 1,
                    Err(e) => {
                        stats.action_errors += 1;
                        tracing::warn!(?action, error = %e, "action failed");
                    }
                }
            }

            self.publisher
                .publish(FeedSnapshot::new(event, stats.frames, hand_present));
        }

        tracing::info!(
            frames = stats.frames,
            hand_frames = stats.hand_frames,
            actions = stats.actions,
            "gesture session finished"
        );
        Ok(stats)
    }
}
