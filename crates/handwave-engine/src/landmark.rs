//! Hand landmark frames
//!
//! A frame is the 21-point hand skeleton reported by the external pose model,
//! in normalized image coordinates (x grows right, y grows down).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Number of landmarks in a hand frame
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_TIP: usize = 12;
pub const RING_TIP: usize = 16;
pub const PINKY_TIP: usize = 20;

/// The five fingertips, thumb first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fingertip {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Fingertip {
    pub const ALL: [Fingertip; 5] = [
        Fingertip::Thumb,
        Fingertip::Index,
        Fingertip::Middle,
        Fingertip::Ring,
        Fingertip::Pinky,
    ];

    /// Landmark index of this fingertip
    pub fn landmark(&self) -> usize {
        match self {
            Fingertip::Thumb => THUMB_TIP,
            Fingertip::Index => INDEX_TIP,
            Fingertip::Middle => MIDDLE_TIP,
            Fingertip::Ring => RING_TIP,
            Fingertip::Pinky => PINKY_TIP,
        }
    }
}

/// A point in normalized 2D image space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Flip horizontally inside the unit square
    pub fn mirrored_x(&self) -> Self {
        Self::new(1.0 - self.x, self.y)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// One observation of a single hand.
///
/// Always holds exactly [`LANDMARK_COUNT`] points; shorter inputs are
/// rejected by [`LandmarkFrame::from_slice`] before they reach the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    points: [Point2D; LANDMARK_COUNT],
}

impl LandmarkFrame {
    pub fn new(points: [Point2D; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Build a frame from untrusted collaborator data
    pub fn from_slice(points: &[Point2D]) -> Result<Self> {
        let points: [Point2D; LANDMARK_COUNT] =
            points.try_into().map_err(|_| EngineError::MalformedFrame {
                expected: LANDMARK_COUNT,
                found: points.len(),
            })?;

        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(EngineError::NonFiniteLandmark { index });
        }

        Ok(Self { points })
    }

    /// Build a frame from raw `(x, y)` pairs
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        let points: Vec<Point2D> = pairs.iter().copied().map(Point2D::from).collect();
        Self::from_slice(&points)
    }

    /// Landmark at `index`, `None` past the last joint
    pub fn point(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    pub fn wrist(&self) -> Point2D {
        self.points[WRIST]
    }

    pub fn tip(&self, finger: Fingertip) -> Point2D {
        self.points[finger.landmark()]
    }

    pub fn points(&self) -> &[Point2D; LANDMARK_COUNT] {
        &self.points
    }

    /// Mirror every landmark horizontally (selfie-camera correction)
    pub fn mirrored(&self) -> Self {
        Self {
            points: self.points.map(|p| p.mirrored_x()),
        }
    }

    /// Shift every landmark by the same offset
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.map(|p| p.translated(dx, dy)),
        }
    }
}
