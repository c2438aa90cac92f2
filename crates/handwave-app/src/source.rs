//! Frame sources
//!
//! Landmark detection happens outside this process. A [`FrameSource`] hands
//! the worker one timestamped observation at a time: a landmark frame, or
//! `None` when no hand was seen.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use handwave_engine::poses::{self, Pose};
use handwave_engine::LandmarkFrame;
use serde::Deserialize;

/// One observation from a source
#[derive(Debug, Clone)]
pub struct SourceFrame {
    /// Seconds on the source's clock
    pub timestamp: f64,
    pub frame: Option<LandmarkFrame>,
}

/// Produces frames for the worker
pub trait FrameSource: Send {
    fn name(&self) -> &str;

    /// Next observation, or `Ok(None)` once the input is exhausted
    fn next_frame(&mut self) -> anyhow::Result<Option<SourceFrame>>;
}

/// Wire format of one JSON line
#[derive(Debug, Deserialize)]
struct FrameLine {
    #[serde(default)]
    t: Option<f64>,
    #[serde(default)]
    landmarks: Option<Vec<[f64; 2]>>,
}

/// Reads `{"t": .., "landmarks": [[x, y], ..]}` objects, one per line
pub struct JsonLinesSource<R> {
    name: String,
    reader: R,
    mirror: bool,
    started: Instant,
    /// Last timestamp handed out and when
    last_stamp: Option<(f64, Instant)>,
    line_no: u64,
    buf: String,
}

impl JsonLinesSource<BufReader<File>> {
    pub fn open(path: &Path, mirror: bool) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open landmark stream {}", path.display()))?;
        Ok(Self::new(path.display().to_string(), BufReader::new(file), mirror))
    }
}

impl JsonLinesSource<BufReader<io::Stdin>> {
    pub fn stdin(mirror: bool) -> Self {
        Self::new("stdin", BufReader::new(io::stdin()), mirror)
    }
}

impl<R: BufRead + Send> JsonLinesSource<R> {
    pub fn new(name: impl Into<String>, reader: R, mirror: bool) -> Self {
        Self {
            name: name.into(),
            reader,
            mirror,
            started: Instant::now(),
            last_stamp: None,
            line_no: 0,
            buf: String::new(),
        }
    }

    fn parse_line(&mut self, line: &str) -> SourceFrame {
        let parsed: FrameLine = match serde_json::from_str(line) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(line = self.line_no, error = %e, "unreadable frame line");
                return SourceFrame {
                    timestamp: self.stamp(None),
                    frame: None,
                };
            }
        };

        let timestamp = self.stamp(parsed.t.filter(|t| t.is_finite()));

        let frame = parsed.landmarks.and_then(|pairs| {
            let pairs: Vec<(f64, f64)> = pairs.into_iter().map(|[x, y]| (x, y)).collect();
            match LandmarkFrame::from_pairs(&pairs) {
                Ok(frame) if self.mirror => Some(frame.mirrored()),
                Ok(frame) => Some(frame),
                Err(e) => {
                    tracing::warn!(line = self.line_no, error = %e, "rejected landmark frame");
                    None
                }
            }
        });

        SourceFrame { timestamp, frame }
    }

    /// Unstamped lines continue from the previous timestamp on the wall clock
    fn stamp(&mut self, explicit: Option<f64>) -> f64 {
        let now = Instant::now();
        let timestamp = match (explicit, self.last_stamp) {
            (Some(t), _) => t,
            (None, Some((last, at))) => last + now.duration_since(at).as_secs_f64(),
            (None, None) => now.duration_since(self.started).as_secs_f64(),
        };
        self.last_stamp = Some((timestamp, now));
        timestamp
    }
}

impl<R: BufRead + Send> FrameSource for JsonLinesSource<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_frame(&mut self) -> anyhow::Result<Option<SourceFrame>> {
        loop {
            self.buf.clear();
            let read = self
                .reader
                .read_line(&mut self.buf)
                .with_context(|| format!("Failed to read from {}", self.name))?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = self.buf.trim();
            if line.is_empty() {
                continue;
            }
            let line = line.to_string();
            return Ok(Some(self.parse_line(&line)));
        }
    }
}

/// Replays a fixed list of frames at a steady rate
pub struct ScriptedSource {
    frames: Vec<Option<LandmarkFrame>>,
    interval: Duration,
    looping: bool,
    paced: bool,
    cursor: usize,
    ticks: u64,
}

impl ScriptedSource {
    pub fn new(frames: Vec<Option<LandmarkFrame>>, interval: Duration) -> Self {
        Self {
            frames,
            interval,
            looping: false,
            paced: false,
            cursor: 0,
            ticks: 0,
        }
    }

    /// Start over at the end of the script instead of ending
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Sleep one interval before each frame
    pub fn paced(mut self, paced: bool) -> Self {
        self.paced = paced;
        self
    }

    /// A short tour of every gesture
    pub fn demo(interval: Duration) -> Self {
        Self::new(demo_script(), interval)
    }

}

impl FrameSource for ScriptedSource {
    fn name(&self) -> &str {
        "demo"
    }

    fn next_frame(&mut self) -> anyhow::Result<Option<SourceFrame>> {
        if self.cursor >= self.frames.len() {
            if !self.looping || self.frames.is_empty() {
                return Ok(None);
            }
            self.cursor = 0;
        }

        if self.paced {
            thread::sleep(self.interval);
        }

        let frame = self.frames[self.cursor].clone();
        let timestamp = self.ticks as f64 * self.interval.as_secs_f64();
        self.cursor += 1;
        self.ticks += 1;
        Ok(Some(SourceFrame { timestamp, frame }))
    }
}

fn hold(script: &mut Vec<Option<LandmarkFrame>>, pose: Pose, frames: usize) {
    let frame = pose.frame();
    script.extend(std::iter::repeat(Some(frame)).take(frames));
}

fn gap(script: &mut Vec<Option<LandmarkFrame>>, frames: usize) {
    script.extend(std::iter::repeat(None).take(frames));
}

/// Frames for the demo tour, roughly eleven seconds at 30 fps
pub fn demo_script() -> Vec<Option<LandmarkFrame>> {
    let mut script = Vec::new();

    gap(&mut script, 15);

    // Trace a slow loop with the pointing hand
    let point = poses::point();
    for i in 0..60 {
        let angle = i as f64 / 60.0 * std::f64::consts::TAU;
        let x = 0.5 + 0.2 * angle.cos();
        let y = 0.45 + 0.15 * angle.sin();
        script.push(Some(poses::with_index_at(&point, x, y)));
    }

    hold(&mut script, Pose::Fist, 10);
    hold(&mut script, Pose::Pinch, 30);
    hold(&mut script, Pose::Fist, 10);
    hold(&mut script, Pose::ScrollUp, 20);
    hold(&mut script, Pose::ScrollDown, 20);
    hold(&mut script, Pose::Fist, 10);
    hold(&mut script, Pose::VSign, 20);
    hold(&mut script, Pose::Fist, 25);
    hold(&mut script, Pose::OpenPalm, 20);
    hold(&mut script, Pose::Fist, 10);

    let fist = poses::fist();
    script.extend(poses::sweep(&fist, 0.25, 0.75, 8).into_iter().map(Some));
    hold(&mut script, Pose::Fist, 25);
    script.extend(poses::sweep(&fist, 0.75, 0.25, 8).into_iter().map(Some));

    gap(&mut script, 15);
    script
}
