//! handwave-engine: gesture recognition for hand landmark streams
//!
//! Turns a stream of 21-point hand landmark frames into discrete desktop
//! control events:
//! - Geometric feature extraction from a single frame
//! - Priority-ordered gesture rules (swipe, pinch, point, scroll, V-sign, palm)
//! - Per-category cooldowns that debounce repeated triggers
//! - A sliding-window swipe detector and an exponentially smoothed cursor
//!
//! The engine is pure: all session state lives in an [`EngineState`] owned by
//! the caller, and time is passed in explicitly.

pub mod classifier;
pub mod config;
pub mod cooldown;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod features;
pub mod gesture;
pub mod landmark;
pub mod poses;
pub mod swipe;

// Re-export commonly used types
pub use classifier::{FrameInput, GestureClassifier, GestureRule, DEFAULT_PRIORITY};
pub use config::{CooldownConfig, EngineConfig, GestureThresholds, SwipeConfig, MAX_SWIPE_HISTORY};
pub use cooldown::{CooldownCategory, CooldownManager};
pub use cursor::CursorFilter;
pub use engine::{EngineState, GestureEngine, ScreenSize};
pub use error::{EngineError, Result};
pub use features::FeatureSet;
pub use gesture::GestureEvent;
pub use landmark::{Fingertip, LandmarkFrame, Point2D, LANDMARK_COUNT};
pub use poses::Pose;
pub use swipe::{SwipeDetector, SwipeDirection};
