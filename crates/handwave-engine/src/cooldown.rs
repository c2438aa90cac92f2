//! Per-category debounce timers

use serde::{Deserialize, Serialize};

use crate::config::CooldownConfig;

/// Gesture families that share a re-trigger timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownCategory {
    Click,
    Scroll,
    Swipe,
    /// Shared by play and pause
    Play,
}

impl CooldownCategory {
    pub const ALL: [CooldownCategory; 4] = [
        CooldownCategory::Click,
        CooldownCategory::Scroll,
        CooldownCategory::Swipe,
        CooldownCategory::Play,
    ];

    fn slot(&self) -> usize {
        match self {
            CooldownCategory::Click => 0,
            CooldownCategory::Scroll => 1,
            CooldownCategory::Swipe => 2,
            CooldownCategory::Play => 3,
        }
    }
}

/// Last-fired timestamps and minimum intervals, in seconds
#[derive(Debug, Clone)]
pub struct CooldownManager {
    intervals: [f64; 4],
    last_fired: [Option<f64>; 4],
}

impl CooldownManager {
    pub fn new(config: &CooldownConfig) -> Self {
        Self {
            intervals: [config.click, config.scroll, config.swipe, config.play],
            last_fired: [None; 4],
        }
    }

    /// Whether a gesture of `category` may fire at `now`.
    ///
    /// A category that has never fired is always ready.
    pub fn ready(&self, category: CooldownCategory, now: f64) -> bool {
        match self.last_fired[category.slot()] {
            None => true,
            Some(last) => now - last > self.intervals[category.slot()],
        }
    }

    /// Record that `category` fired at `now`.
    ///
    /// Timestamps never move backwards.
    pub fn fire(&mut self, category: CooldownCategory, now: f64) {
        let slot = &mut self.last_fired[category.slot()];
        *slot = Some(match *slot {
            Some(last) if last > now => last,
            _ => now,
        });
    }

    pub fn last_fired(&self, category: CooldownCategory) -> Option<f64> {
        self.last_fired[category.slot()]
    }

    pub fn interval(&self, category: CooldownCategory) -> f64 {
        self.intervals[category.slot()]
    }

    pub(crate) fn reset(&mut self) {
        self.last_fired = [None; 4];
    }
}

impl Default for CooldownManager {
    fn default() -> Self {
        Self::new(&CooldownConfig::default())
    }
}
