//! Translating gesture events into desktop actions
//!
//! Injecting input into the operating system is left to an [`ActionExecutor`]
//! implementation. The shipped [`DryRunExecutor`] only logs what it would do.

use std::thread;
use std::time::Duration;

use handwave_engine::GestureEvent;

/// Media keys, by Windows virtual-key code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKey {
    PlayPause,
    NextTrack,
    PrevTrack,
}

impl MediaKey {
    pub fn vk_code(&self) -> u8 {
        match self {
            MediaKey::PlayPause => 0xB3,
            MediaKey::NextTrack => 0xB0,
            MediaKey::PrevTrack => 0xB1,
        }
    }
}

/// One OS-level input action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the pointer to absolute pixel coordinates
    MoveTo { x: i32, y: i32 },
    LeftClick,
    /// Wheel units, positive is up
    Scroll(i32),
    /// Key down, short hold, key up
    Media(MediaKey),
}

/// Map an event to the action it triggers; Idle triggers nothing
pub fn action_for(event: &GestureEvent, scroll_units: i32) -> Option<Action> {
    match event {
        GestureEvent::Idle => None,
        GestureEvent::Cursor { x, y } => Some(Action::MoveTo {
            x: x.round() as i32,
            y: y.round() as i32,
        }),
        GestureEvent::Click => Some(Action::LeftClick),
        GestureEvent::ScrollUp => Some(Action::Scroll(scroll_units)),
        GestureEvent::ScrollDown => Some(Action::Scroll(-scroll_units)),
        // Play and pause both toggle
        GestureEvent::Play | GestureEvent::Pause => Some(Action::Media(MediaKey::PlayPause)),
        GestureEvent::NextTrack => Some(Action::Media(MediaKey::NextTrack)),
        GestureEvent::PrevTrack => Some(Action::Media(MediaKey::PrevTrack)),
    }
}

/// Performs actions on behalf of the worker
pub trait ActionExecutor: Send {
    fn name(&self) -> &str;

    fn execute(&mut self, action: &Action) -> anyhow::Result<()>;
}

/// Logs every action instead of injecting it
#[derive(Debug, Clone)]
pub struct DryRunExecutor {
    key_hold: Duration,
    executed: u64,
}

impl DryRunExecutor {
    pub fn new(key_hold: Duration) -> Self {
        Self {
            key_hold,
            executed: 0,
        }
    }

    pub fn executed(&self) -> u64 {
        self.executed
    }

    fn tap(&self, key: MediaKey) {
        tracing::info!(?key, vk = key.vk_code(), "media key down");
        if !self.key_hold.is_zero() {
            thread::sleep(self.key_hold);
        }
        tracing::info!(?key, vk = key.vk_code(), "media key up");
    }
}

impl ActionExecutor for DryRunExecutor {
    fn name(&self) -> &str {
        "dry-run"
    }

    fn execute(&mut self, action: &Action) -> anyhow::Result<()> {
        match action {
            Action::MoveTo { x, y } => tracing::debug!(x, y, "move pointer"),
            Action::LeftClick => tracing::info!("left click"),
            Action::Scroll(units) => tracing::info!(units, "scroll"),
            Action::Media(key) => self.tap(*key),
        }
        self.executed += 1;
        Ok(())
    }
}
