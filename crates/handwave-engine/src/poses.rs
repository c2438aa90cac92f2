//! Synthetic hand poses
//!
//! Hand-built landmark frames that land squarely inside one gesture each under
//! the default thresholds. Used by the demo source and by tests.

use crate::landmark::{LandmarkFrame, Point2D, LANDMARK_COUNT, WRIST};

/// Named synthetic poses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pose {
    /// Relaxed fist; matches nothing
    Fist,
    Pinch,
    Point,
    ScrollUp,
    ScrollDown,
    VSign,
    OpenPalm,
}

impl Pose {
    pub const ALL: [Pose; 7] = [
        Pose::Fist,
        Pose::Pinch,
        Pose::Point,
        Pose::ScrollUp,
        Pose::ScrollDown,
        Pose::VSign,
        Pose::OpenPalm,
    ];

    pub fn frame(&self) -> LandmarkFrame {
        match self {
            Pose::Fist => fist(),
            Pose::Pinch => pinch(),
            Pose::Point => point(),
            Pose::ScrollUp => scroll_up(),
            Pose::ScrollDown => scroll_down(),
            Pose::VSign => v_sign(),
            Pose::OpenPalm => open_palm(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pose::Fist => "fist",
            Pose::Pinch => "pinch",
            Pose::Point => "point",
            Pose::ScrollUp => "scroll-up",
            Pose::ScrollDown => "scroll-down",
            Pose::VSign => "v-sign",
            Pose::OpenPalm => "open-palm",
        }
    }
}

const WRIST_AT: (f64, f64) = (0.50, 0.80);

/// Build a frame from a wrist and the five fingertips (thumb first).
///
/// Intermediate joints are spread evenly along each wrist-to-tip segment.
pub fn hand(wrist: (f64, f64), tips: [(f64, f64); 5]) -> LandmarkFrame {
    let wrist = Point2D::from(wrist);
    let mut points = [wrist; LANDMARK_COUNT];

    for (finger, tip) in tips.iter().enumerate() {
        let tip = Point2D::from(*tip);
        let base = 1 + finger * 4;
        for joint in 0..4 {
            let t = (joint + 1) as f64 / 4.0;
            points[base + joint] = Point2D::new(
                wrist.x + (tip.x - wrist.x) * t,
                wrist.y + (tip.y - wrist.y) * t,
            );
        }
    }

    debug_assert_eq!(points[WRIST], wrist);
    LandmarkFrame::new(points)
}

pub fn fist() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.42, 0.78), (0.50, 0.72), (0.52, 0.72), (0.54, 0.73), (0.56, 0.75)],
    )
}

pub fn pinch() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.52, 0.52), (0.50, 0.50), (0.53, 0.74), (0.55, 0.75), (0.57, 0.76)],
    )
}

pub fn point() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.42, 0.76), (0.50, 0.55), (0.53, 0.74), (0.55, 0.75), (0.57, 0.76)],
    )
}

pub fn scroll_up() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.40, 0.75), (0.48, 0.55), (0.53, 0.66), (0.55, 0.75), (0.57, 0.76)],
    )
}

pub fn scroll_down() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.40, 0.76), (0.48, 0.74), (0.53, 0.55), (0.55, 0.75), (0.57, 0.76)],
    )
}

pub fn v_sign() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.40, 0.74), (0.42, 0.52), (0.58, 0.52), (0.55, 0.75), (0.57, 0.76)],
    )
}

pub fn open_palm() -> LandmarkFrame {
    hand(
        WRIST_AT,
        [(0.30, 0.65), (0.45, 0.50), (0.52, 0.48), (0.58, 0.50), (0.65, 0.56)],
    )
}

/// Shift a frame so its index fingertip lands on `(x, y)`
pub fn with_index_at(frame: &LandmarkFrame, x: f64, y: f64) -> LandmarkFrame {
    let tip = frame.tip(crate::landmark::Fingertip::Index);
    frame.translated(x - tip.x, y - tip.y)
}

/// A lateral sweep of `frame`, index tip moving from `from_x` to `to_x`
pub fn sweep(frame: &LandmarkFrame, from_x: f64, to_x: f64, steps: usize) -> Vec<LandmarkFrame> {
    let tip = frame.tip(crate::landmark::Fingertip::Index);
    let steps = steps.max(2);
    (0..steps)
        .map(|i| {
            let x = from_x + (to_x - from_x) * i as f64 / (steps - 1) as f64;
            with_index_at(frame, x, tip.y)
        })
        .collect()
}
