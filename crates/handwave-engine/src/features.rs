//! Per-frame geometric features

use crate::landmark::{Fingertip, LandmarkFrame, Point2D};

/// Scalar measurements derived from one landmark frame.
///
/// Distances are in normalized image units. `index_minus_middle_y` is
/// negative when the index tip sits above the middle tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSet {
    pub thumb_index: f64,
    pub index_wrist: f64,
    pub middle_wrist: f64,
    pub index_middle: f64,
    pub index_minus_middle_y: f64,
    /// Fingertip-to-wrist distances, thumb first
    pub tip_wrist: [f64; 5],
    /// Index fingertip position, used for swipe tracking and cursor mapping
    pub index_tip: Point2D,
}

impl FeatureSet {
    /// Extract features from a frame
    pub fn extract(frame: &LandmarkFrame) -> Self {
        let wrist = frame.wrist();
        let thumb = frame.tip(Fingertip::Thumb);
        let index = frame.tip(Fingertip::Index);
        let middle = frame.tip(Fingertip::Middle);

        let tip_wrist = Fingertip::ALL.map(|finger| frame.tip(finger).distance(&wrist));

        Self {
            thumb_index: thumb.distance(&index),
            index_wrist: index.distance(&wrist),
            middle_wrist: middle.distance(&wrist),
            index_middle: index.distance(&middle),
            index_minus_middle_y: index.y - middle.y,
            tip_wrist,
            index_tip: index,
        }
    }
}
