//! Sliding-window swipe detection

use std::collections::VecDeque;

/// Direction of a lateral swipe in image space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Tracks recent horizontal positions of one landmark.
///
/// The detector only measures; deciding whether the movement counts as a
/// swipe (and resetting after a trigger) is the classifier's job.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    history: VecDeque<f64>,
    capacity: usize,
}

impl SwipeDetector {
    /// Create a detector keeping `capacity` samples (at least two)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            history: VecDeque::with_capacity(capacity.min(16)),
            capacity,
        }
    }

    /// Record a sample; returns `latest - oldest` once the window is full
    pub fn observe(&mut self, x: f64) -> Option<f64> {
        self.history.push_back(x);
        while self.history.len() > self.capacity {
            self.history.pop_front();
        }

        if self.history.len() < self.capacity {
            return None;
        }

        match (self.history.front(), self.history.back()) {
            (Some(oldest), Some(latest)) => Some(latest - oldest),
            _ => None,
        }
    }

    /// Forget all samples
    pub fn reset(&mut self) {
        self.history.clear();
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Samples, oldest first
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }
}

/// Classify a net movement against a symmetric threshold
pub fn direction_of(movement: f64, threshold: f64) -> Option<SwipeDirection> {
    if movement > threshold {
        Some(SwipeDirection::Right)
    } else if movement < -threshold {
        Some(SwipeDirection::Left)
    } else {
        None
    }
}
