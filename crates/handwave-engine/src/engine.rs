//! Per-frame engine driver

use serde::{Deserialize, Serialize};

use crate::classifier::{FrameInput, GestureClassifier, GestureRule};
use crate::config::EngineConfig;
use crate::cooldown::CooldownManager;
use crate::cursor::CursorFilter;
use crate::error::{EngineError, Result};
use crate::features::FeatureSet;
use crate::gesture::GestureEvent;
use crate::landmark::{LandmarkFrame, Point2D};
use crate::swipe::SwipeDetector;

/// Screen resolution in pixels, queried once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map a normalized point to pixel coordinates
    pub fn map(&self, point: Point2D) -> (f64, f64) {
        (point.x * self.width as f64, point.y * self.height as f64)
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

/// Session state threaded through every [`GestureEngine::process`] call.
///
/// Owned by the caller; the engine itself holds no mutable state.
#[derive(Debug, Clone)]
pub struct EngineState {
    pub cooldowns: CooldownManager,
    pub swipe: SwipeDetector,
    pub cursor: CursorFilter,
}

impl EngineState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            cooldowns: CooldownManager::new(&config.cooldowns),
            swipe: SwipeDetector::new(config.swipe.history_len),
            cursor: CursorFilter::new(config.cursor_smoothing),
        }
    }

    /// Start a new session: forget timers, swipe history and cursor position
    pub fn reset(&mut self) {
        self.cooldowns.reset();
        self.swipe.reset();
        self.cursor.reset();
    }
}

/// Turns landmark frames into gesture events
#[derive(Debug, Clone)]
pub struct GestureEngine {
    config: EngineConfig,
    classifier: GestureClassifier,
}

impl GestureEngine {
    /// Create an engine after validating the configuration
    pub fn new(config: EngineConfig, screen: ScreenSize) -> Result<Self> {
        config.validate()?;
        if screen.width == 0 || screen.height == 0 {
            return Err(EngineError::InvalidConfig(format!(
                "screen size must be non-zero, got {}x{}",
                screen.width, screen.height
            )));
        }

        let classifier =
            GestureClassifier::new(config.thresholds.clone(), config.swipe.threshold, screen);
        Ok(Self { config, classifier })
    }

    /// Replace the rule priority order
    pub fn with_rules(mut self, rules: Vec<GestureRule>) -> Self {
        self.classifier = self.classifier.with_rules(rules);
        self
    }

    /// Fresh session state matching this engine's configuration
    pub fn new_state(&self) -> EngineState {
        EngineState::new(&self.config)
    }

    /// Process one tick.
    ///
    /// `frame` is `None` when no hand is visible; that tick is Idle and leaves
    /// `state` untouched. `now` is in seconds on the caller's clock.
    pub fn process(
        &self,
        state: &mut EngineState,
        frame: Option<&LandmarkFrame>,
        now: f64,
    ) -> GestureEvent {
        let Some(frame) = frame else {
            tracing::trace!(now, "no hand");
            return GestureEvent::Idle;
        };

        let features = FeatureSet::extract(frame);
        let swipe_movement = state.swipe.observe(features.index_tip.x);
        tracing::trace!(
            now,
            thumb_index = features.thumb_index,
            index_wrist = features.index_wrist,
            middle_wrist = features.middle_wrist,
            swipe_movement = ?swipe_movement,
            "frame features"
        );

        let input = FrameInput {
            features,
            swipe_movement,
        };
        self.classifier.classify(&input, state, now)
    }
}
