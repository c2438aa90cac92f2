//! Engine tuning constants
//!
//! Every threshold the classifier consults lives here so callers (and tests)
//! can exercise boundaries without touching the rules.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Largest swipe window accepted from configuration
pub const MAX_SWIPE_HISTORY: usize = 64;

/// Geometric thresholds, in normalized image units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    /// Thumb-index distance below which a pinch registers
    pub click_distance: f64,
    /// Index-wrist distance above which the index counts as extended
    pub point_extended: f64,
    /// Middle-wrist distance below which the middle finger counts as folded
    pub point_folded: f64,
    /// Vertical index/middle offset required for scrolling
    pub scroll_margin: f64,
    /// Index-middle spread above which a V-sign registers
    pub vsign_spread: f64,
    /// Fingertip-wrist distance every finger must exceed for an open palm
    pub palm_extended: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            click_distance: 0.05,
            point_extended: 0.15,
            point_folded: 0.12,
            scroll_margin: 0.05,
            vsign_spread: 0.12,
            palm_extended: 0.15,
        }
    }
}

/// Swipe window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Number of frames in the sliding window
    pub history_len: usize,
    /// Net lateral movement needed to trigger, in frame widths
    pub threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            history_len: 5,
            threshold: 0.18,
        }
    }
}

/// Minimum re-trigger intervals in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CooldownConfig {
    pub click: f64,
    pub scroll: f64,
    pub swipe: f64,
    pub play: f64,
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self {
            click: 0.6,
            scroll: 0.25,
            swipe: 1.0,
            play: 1.0,
        }
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cursor smoothing factor (alpha of the low-pass filter)
    pub cursor_smoothing: f64,
    pub thresholds: GestureThresholds,
    pub swipe: SwipeConfig,
    pub cooldowns: CooldownConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cursor_smoothing: 0.2,
            thresholds: GestureThresholds::default(),
            swipe: SwipeConfig::default(),
            cooldowns: CooldownConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.cursor_smoothing > 0.0 && self.cursor_smoothing <= 1.0) {
            return Err(EngineError::InvalidConfig(format!(
                "cursor_smoothing must be in (0, 1], got {}",
                self.cursor_smoothing
            )));
        }

        let t = &self.thresholds;
        let distances = [
            ("click_distance", t.click_distance),
            ("point_extended", t.point_extended),
            ("point_folded", t.point_folded),
            ("scroll_margin", t.scroll_margin),
            ("vsign_spread", t.vsign_spread),
            ("palm_extended", t.palm_extended),
            ("swipe.threshold", self.swipe.threshold),
        ];
        for (name, value) in distances {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if !(2..=MAX_SWIPE_HISTORY).contains(&self.swipe.history_len) {
            return Err(EngineError::InvalidConfig(format!(
                "swipe.history_len must be between 2 and {}, got {}",
                MAX_SWIPE_HISTORY, self.swipe.history_len
            )));
        }

        let c = &self.cooldowns;
        for (name, value) in [
            ("click", c.click),
            ("scroll", c.scroll),
            ("swipe", c.swipe),
            ("play", c.play),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidConfig(format!(
                    "cooldowns.{} must be a non-negative number of seconds, got {}",
                    name, value
                )));
            }
        }

        if t.point_folded >= t.point_extended {
            tracing::warn!(
                point_folded = t.point_folded,
                point_extended = t.point_extended,
                "point_folded is not below point_extended; pointing will be hard to trigger"
            );
        }

        Ok(())
    }
}
