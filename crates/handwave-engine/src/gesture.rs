//! Gesture events emitted by the engine

use serde::{Deserialize, Serialize};

use crate::cooldown::CooldownCategory;
use crate::swipe::SwipeDirection;

/// The single decision produced for one processed frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureEvent {
    /// No hand, or no rule matched
    #[default]
    Idle,

    /// Move the pointer to smoothed screen coordinates (pixels)
    Cursor { x: f64, y: f64 },

    /// Pinch thumb and index together
    Click,

    /// Index tip raised above the middle tip
    ScrollUp,

    /// Index tip dropped below the middle tip
    ScrollDown,

    /// V-sign
    Play,

    /// Open palm
    Pause,

    /// Swipe right
    NextTrack,

    /// Swipe left
    PrevTrack,
}

impl GestureEvent {
    /// Human-readable label for on-screen display
    pub fn label(&self) -> &'static str {
        match self {
            GestureEvent::Idle => "Idle",
            GestureEvent::Cursor { .. } => "Cursor",
            GestureEvent::Click => "Click",
            GestureEvent::ScrollUp => "Scroll Up",
            GestureEvent::ScrollDown => "Scroll Down",
            GestureEvent::Play => "Play",
            GestureEvent::Pause => "Pause",
            GestureEvent::NextTrack => "Next track",
            GestureEvent::PrevTrack => "Previous track",
        }
    }

    /// Cooldown timer this event is debounced by, if any
    pub fn category(&self) -> Option<CooldownCategory> {
        match self {
            GestureEvent::Idle | GestureEvent::Cursor { .. } => None,
            GestureEvent::Click => Some(CooldownCategory::Click),
            GestureEvent::ScrollUp | GestureEvent::ScrollDown => Some(CooldownCategory::Scroll),
            GestureEvent::Play | GestureEvent::Pause => Some(CooldownCategory::Play),
            GestureEvent::NextTrack | GestureEvent::PrevTrack => Some(CooldownCategory::Swipe),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, GestureEvent::Idle)
    }

    /// Check if this event drives a media key
    pub fn is_media(&self) -> bool {
        matches!(
            self,
            GestureEvent::Play
                | GestureEvent::Pause
                | GestureEvent::NextTrack
                | GestureEvent::PrevTrack
        )
    }

    /// Get swipe direction if this is a track-skip event
    pub fn swipe_direction(&self) -> Option<SwipeDirection> {
        match self {
            GestureEvent::NextTrack => Some(SwipeDirection::Right),
            GestureEvent::PrevTrack => Some(SwipeDirection::Left),
            _ => None,
        }
    }

    pub(crate) fn from_swipe(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => GestureEvent::NextTrack,
            SwipeDirection::Left => GestureEvent::PrevTrack,
        }
    }
}

impl std::fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureEvent::Cursor { x, y } => write!(f, "Cursor ({:.0}, {:.0})", x, y),
            other => f.write_str(other.label()),
        }
    }
}
