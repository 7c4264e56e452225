#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swipe {
    Up,
    Down,
    Left,
    Right,
}

/// Turns a touchstart/touchend pair into a swipe direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeDetector {
    threshold: f64,
    start: Option<(f64, f64)>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl SwipeDetector {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    pub fn touch_start(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Classify the gesture ending at `(x, y)`.
    ///
    /// Travel shorter than the threshold on both axes is ignored and keeps the
    /// start point, so a later touchend can still complete the swipe.
    pub fn touch_end(&mut self, x: f64, y: f64) -> Option<Swipe> {
        let (start_x, start_y) = self.start?;
        let dx = x - start_x;
        let dy = y - start_y;

        if dx.abs().max(dy.abs()) < self.threshold {
            return None;
        }
        self.start = None;

        let swipe = if dx.abs() > dy.abs() {
            if dx > 0.0 { Swipe::Right } else { Swipe::Left }
        } else if dy > 0.0 {
            Swipe::Down
        } else {
            Swipe::Up
        };
        Some(swipe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions() {
        let cases = [
            ((100.0, 100.0), (20.0, 110.0), Swipe::Left),
            ((100.0, 100.0), (190.0, 80.0), Swipe::Right),
            ((100.0, 100.0), (110.0, 20.0), Swipe::Up),
            ((100.0, 100.0), (90.0, 220.0), Swipe::Down),
        ];
        for ((sx, sy), (ex, ey), expected) in cases {
            let mut detector = SwipeDetector::default();
            detector.touch_start(sx, sy);
            assert_eq!(detector.touch_end(ex, ey), Some(expected));
        }
    }

    #[test]
    fn test_below_threshold() {
        let mut detector = SwipeDetector::new(50.0);
        detector.touch_start(0.0, 0.0);
        assert_eq!(detector.touch_end(49.0, -49.0), None);
        // start point is kept after a short gesture
        assert_eq!(detector.touch_end(-60.0, 0.0), Some(Swipe::Left));
        // and cleared after a recognised one
        assert_eq!(detector.touch_end(-60.0, 0.0), None);
    }

    #[test]
    fn test_end_without_start() {
        let mut detector = SwipeDetector::default();
        assert_eq!(detector.touch_end(500.0, 0.0), None);
    }

    #[test]
    fn test_diagonal_prefers_vertical() {
        let mut detector = SwipeDetector::default();
        detector.touch_start(0.0, 0.0);
        assert_eq!(detector.touch_end(80.0, 80.0), Some(Swipe::Down));
    }
}
