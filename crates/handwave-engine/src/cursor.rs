//! Exponential cursor smoothing

/// Single-pole low-pass filter over screen-space pointer targets.
///
/// The first update snaps to the target; later updates move a fraction
/// `alpha` of the way from the current position towards the target.
#[derive(Debug, Clone)]
pub struct CursorFilter {
    alpha: f64,
    position: Option<(f64, f64)>,
}

impl CursorFilter {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            position: None,
        }
    }

    /// Feed a new target and return the smoothed position
    pub fn update(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        let next = match self.position {
            None => (target_x, target_y),
            Some((x, y)) => (
                x * (1.0 - self.alpha) + target_x * self.alpha,
                y * (1.0 - self.alpha) + target_y * self.alpha,
            ),
        };
        self.position = Some(next);
        next
    }

    /// Current smoothed position, if any target has been seen
    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub(crate) fn reset(&mut self) {
        self.position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_snaps() {
        let mut filter = CursorFilter::new(0.2);
        assert_eq!(filter.position(), None);
        assert_eq!(filter.update(100.0, 100.0), (100.0, 100.0));
    }

    #[test]
    fn test_smoothing_step() {
        let mut filter = CursorFilter::new(0.2);
        filter.update(100.0, 100.0);
        let (x, y) = filter.update(200.0, 100.0);
        assert!((x - 120.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_converges_to_target() {
        let mut filter = CursorFilter::new(0.22);
        filter.update(0.0, 0.0);
        let mut last = (0.0, 0.0);
        for _ in 0..200 {
            last = filter.update(640.0, 360.0);
        }
        assert!((last.0 - 640.0).abs() < 0.01);
        assert!((last.1 - 360.0).abs() < 0.01);
    }

    #[test]
    fn test_reset_forgets_position() {
        let mut filter = CursorFilter::new(0.2);
        filter.update(10.0, 10.0);
        filter.reset();
        assert_eq!(filter.update(50.0, 60.0), (50.0, 60.0));
    }
}
