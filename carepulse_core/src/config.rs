use std::time::Duration;

/// Tuning knobs shared by the scroll, gesture and entrance-animation logic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandingConfig {
    /// Added to the scroll offset before testing section bounds so the fixed
    /// header does not hide the section that is considered current.
    pub header_offset: f64,
    /// How long section tracking stays frozen after a programmatic jump.
    pub scroll_cooldown: Duration,
    /// Scroll offset past which the header switches to its blurred style.
    pub header_scrolled_threshold: f64,
    /// Minimum travel of a touch, in CSS pixels, to count as a swipe.
    pub swipe_threshold: f64,
    pub headline_delay: Duration,
    pub subtitle_delay: Duration,
    pub group_delay: Duration,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_offset: 100.0,
            scroll_cooldown: Duration::from_millis(1000),
            header_scrolled_threshold: 50.0,
            swipe_threshold: 50.0,
            headline_delay: Duration::ZERO,
            subtitle_delay: Duration::from_millis(500),
            group_delay: Duration::from_millis(750),
        }
    }
}

impl LandingConfig {
    pub fn header_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.header_scrolled_threshold
    }
}

#[test]
fn test_header_scrolled() {
    let config = LandingConfig::default();
    assert!(!config.header_scrolled(0.0));
    assert!(!config.header_scrolled(50.0));
    assert!(config.header_scrolled(50.5));
}
