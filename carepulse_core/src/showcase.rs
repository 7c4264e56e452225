use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("feature {index} is out of range for {count} features")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Bounding rect of the showcase scroll container, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowcaseGeometry {
    pub top: f64,
    pub bottom: f64,
    pub height: f64,
    pub viewport_height: f64,
}

impl ShowcaseGeometry {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            bottom: top + height,
            height,
            viewport_height,
        }
    }

    /// The container has scrolled past the top of the viewport and its bottom
    /// has not come up yet.
    pub fn is_pinned(&self) -> bool {
        self.top <= 0.0 && self.bottom > self.viewport_height
    }

    /// Fraction of the pinned scroll range already travelled.
    pub fn progress(&self) -> f64 {
        let range = self.height - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        self.top.abs() / range
    }
}

/// Which slide of the showcase is active and whether it is pinned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureShowcase {
    count: usize,
    current: usize,
    pinned: bool,
}

impl FeatureShowcase {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            current: 0,
            pinned: false,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn observe(&mut self, geometry: ShowcaseGeometry) {
        self.pinned = geometry.is_pinned();
        if !self.pinned || self.count == 0 {
            return;
        }

        let index = (geometry.progress() * self.count as f64).floor() as usize;
        self.current = index.min(self.count - 1);
    }

    pub fn next(&mut self) {
        if self.count == 0 {
            return;
        }
        self.current = (self.current + 1) % self.count;
    }

    pub fn previous(&mut self) {
        if self.count == 0 {
            return;
        }
        self.current = (self.current + self.count - 1) % self.count;
    }

    pub fn select(&mut self, index: usize) -> Result<(), ShowcaseError> {
        if index >= self.count {
            return Err(ShowcaseError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    // min-h-[500vh]
    const HEIGHT: f64 = 5.0 * VIEWPORT;

    #[test]
    fn test_wrap_around() {
        for count in 1..12 {
            let mut showcase = FeatureShowcase::new(count);
            showcase.select(count - 1).unwrap();
            showcase.next();
            assert_eq!(showcase.current(), 0);
            showcase.previous();
            assert_eq!(showcase.current(), count - 1);
        }
    }

    #[test]
    fn test_select_in_range() {
        let mut showcase = FeatureShowcase::new(5);
        showcase.next();
        showcase.next();
        for i in [4, 0, 3, 3, 1] {
            showcase.select(i).unwrap();
            assert_eq!(showcase.current(), i);
        }
    }

    #[test]
    fn test_select_out_of_range() {
        let mut showcase = FeatureShowcase::new(5);
        showcase.select(2).unwrap();
        assert_eq!(
            showcase.select(5),
            Err(ShowcaseError::IndexOutOfRange { index: 5, count: 5 })
        );
        assert_eq!(showcase.current(), 2);
    }

    #[test]
    fn test_empty_showcase_is_inert() {
        let mut showcase = FeatureShowcase::new(0);
        showcase.next();
        showcase.previous();
        showcase.observe(ShowcaseGeometry::new(-100.0, HEIGHT, VIEWPORT));
        assert!(showcase.is_pinned());
        assert_eq!(showcase.current(), 0);
        assert!(showcase.select(0).is_err());
    }

    #[test]
    fn test_pinning() {
        let mut showcase = FeatureShowcase::new(5);

        // still below the top of the viewport
        showcase.observe(ShowcaseGeometry::new(120.0, HEIGHT, VIEWPORT));
        assert!(!showcase.is_pinned());

        showcase.observe(ShowcaseGeometry::new(0.0, HEIGHT, VIEWPORT));
        assert!(showcase.is_pinned());

        // bottom has reached the bottom of the viewport
        showcase.observe(ShowcaseGeometry::new(VIEWPORT - HEIGHT, HEIGHT, VIEWPORT));
        assert!(!showcase.is_pinned());
    }

    #[test]
    fn test_progress_maps_to_index() {
        let mut showcase = FeatureShowcase::new(5);
        let range = HEIGHT - VIEWPORT;

        for (fraction, expected) in [(0.0, 0), (0.19, 0), (0.2, 1), (0.5, 2), (0.79, 3), (0.99, 4)] {
            showcase.observe(ShowcaseGeometry::new(-fraction * range, HEIGHT, VIEWPORT));
            assert!(showcase.is_pinned());
            assert_eq!(showcase.current(), expected, "progress {}", fraction);
        }
    }

    #[test]
    fn test_manual_choice_survives_until_scroll() {
        let mut showcase = FeatureShowcase::new(5);
        showcase.select(4).unwrap();

        // not pinned: nothing recomputed
        showcase.observe(ShowcaseGeometry::new(300.0, HEIGHT, VIEWPORT));
        assert_eq!(showcase.current(), 4);

        showcase.observe(ShowcaseGeometry::new(-10.0, HEIGHT, VIEWPORT));
        assert_eq!(showcase.current(), 0);
    }
}
