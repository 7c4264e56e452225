use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The five anchor regions of the page, in scroll order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumCount, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Hero,
    Appointments,
    Insights,
    Records,
    Billing,
}

impl Section {
    pub const FIRST: Section = Section::Hero;
    pub const LAST: Section = Section::Billing;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Section::iter().nth(index)
    }

    /// Element id of the anchor on the page.
    pub fn id(self) -> &'static str {
        self.into()
    }

    pub fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Appointments => "Appointments",
            Section::Insights => "Reports",
            Section::Records => "Records",
            Section::Billing => "Billing",
        }
    }

    /// Sections listed in the header menu (everything except the hero).
    pub fn menu() -> impl Iterator<Item = Section> {
        Section::iter().filter(|s| *s != Section::Hero)
    }
}

/// Layout of a rendered section relative to the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.height
    }
}

/// Tracks which section the reader is in.
///
/// Tracking is frozen between [`SectionTracker::begin_jump`] and
/// [`SectionTracker::end_jump`] so a smooth scroll in flight does not flicker
/// the highlighted section through every region it passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionTracker {
    current: usize,
    suppressed: bool,
    header_offset: f64,
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl SectionTracker {
    pub fn new(header_offset: f64) -> Self {
        Self {
            current: 0,
            suppressed: false,
            header_offset,
        }
    }

    pub fn current(&self) -> Section {
        Section::from_index(self.current).unwrap_or(Section::FIRST)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Recompute the current section from the scroll offset.
    ///
    /// `bounds` is indexed by section order; `None` entries are sections that
    /// are not in the DOM. Returns true when the current section changed.
    pub fn observe(&mut self, scroll_y: f64, bounds: &[Option<SectionBounds>]) -> bool {
        if self.suppressed {
            return false;
        }

        let probe = scroll_y + self.header_offset;
        let previous = self.current;
        // later sections win if bounds overlap
        for (index, bound) in bounds.iter().enumerate().take(Section::COUNT) {
            if let Some(bound) = bound {
                if bound.contains(probe) {
                    self.current = index;
                }
            }
        }
        self.current != previous
    }

    pub fn begin_jump(&mut self, target: Section) -> Section {
        self.suppressed = true;
        target
    }

    pub fn end_jump(&mut self) {
        self.suppressed = false;
    }

    fn clamped_target(&self, index: isize) -> Option<Section> {
        let clamped = index.clamp(0, Section::COUNT as isize - 1) as usize;
        if clamped == self.current {
            None
        } else {
            Section::from_index(clamped)
        }
    }

    pub fn next_target(&self) -> Option<Section> {
        self.clamped_target(self.current as isize + 1)
    }

    pub fn previous_target(&self) -> Option<Section> {
        self.clamped_target(self.current as isize - 1)
    }

    /// Next section, or back to the top from the last one.
    pub fn cycle_target(&self) -> Section {
        self.next_target().unwrap_or(Section::FIRST)
    }

    pub fn can_go_next(&self) -> bool {
        self.current < Section::COUNT - 1
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn at_last(&self) -> bool {
        self.current == Section::LAST.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // 600px tall sections stacked from the top of the document
    fn stacked_bounds() -> Vec<Option<SectionBounds>> {
        Section::iter()
            .map(|s| Some(SectionBounds::new(s.index() as f64 * 600.0, 600.0)))
            .collect()
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<&str> = Section::iter().map(Section::id).collect();
        assert_eq!(
            ids,
            ["hero", "appointments", "insights", "records", "billing"]
        );
        assert_eq!(Section::from_id("insights"), Some(Section::Insights));
        assert_eq!(Section::from_id("footer"), None);
        assert_eq!(Section::Insights.label(), "Reports");
        assert_eq!(Section::menu().count(), 4);
    }

    #[test]
    fn test_observe_inside_section() {
        let bounds = stacked_bounds();
        for section in Section::iter() {
            let mut tracker = SectionTracker::new(100.0);
            // probe is scroll_y + 100
            let scroll_y = section.index() as f64 * 600.0 + 250.0 - 100.0;
            tracker.observe(scroll_y, &bounds);
            assert_eq!(tracker.current(), section);
        }
    }

    #[test]
    fn test_observe_uses_header_offset() {
        let bounds = stacked_bounds();
        let mut tracker = SectionTracker::new(100.0);
        // 520 + 100 crosses into the second section
        assert!(tracker.observe(520.0, &bounds));
        assert_eq!(tracker.current(), Section::Appointments);
        assert!(tracker.observe(499.0, &bounds));
        assert_eq!(tracker.current(), Section::Hero);
    }

    #[test]
    fn test_observe_no_match_keeps_current() {
        let mut bounds = stacked_bounds();
        let mut tracker = SectionTracker::new(100.0);
        tracker.observe(1300.0, &bounds);
        assert_eq!(tracker.current(), Section::Insights);

        // past the end of the document
        assert!(!tracker.observe(10_000.0, &bounds));
        assert_eq!(tracker.current(), Section::Insights);

        // missing elements are skipped
        bounds[3] = None;
        tracker.observe(1900.0, &bounds);
        assert_eq!(tracker.current(), Section::Insights);
    }

    #[test]
    fn test_observe_suppressed_during_jump() {
        let bounds = stacked_bounds();
        let mut tracker = SectionTracker::new(100.0);
        let target = tracker.begin_jump(Section::Billing);
        assert_eq!(target, Section::Billing);
        assert!(tracker.is_suppressed());

        // mid-flight positions are ignored
        assert!(!tracker.observe(1300.0, &bounds));
        assert_eq!(tracker.current(), Section::Hero);

        tracker.end_jump();
        tracker.observe(2450.0, &bounds);
        assert_eq!(tracker.current(), Section::Billing);
    }

    #[test]
    fn test_targets_clamp() {
        let bounds = stacked_bounds();
        let mut tracker = SectionTracker::new(100.0);
        assert_eq!(tracker.previous_target(), None);
        assert_eq!(tracker.next_target(), Some(Section::Appointments));
        assert!(!tracker.can_go_previous());
        assert!(tracker.can_go_next());

        tracker.observe(2450.0, &bounds);
        assert!(tracker.at_last());
        assert_eq!(tracker.next_target(), None);
        assert_eq!(tracker.previous_target(), Some(Section::Records));
        assert_eq!(tracker.cycle_target(), Section::Hero);
        assert!(!tracker.can_go_next());
    }

    #[test]
    fn test_observe_random_offsets() {
        let mut rng = StdRng::from_seed([7u8; 32]);
        let mut offset = 0.0;
        let bounds: Vec<Option<SectionBounds>> = Section::iter()
            .map(|_| {
                let height = rng.random_range(200.0..2000.0);
                let bound = SectionBounds::new(offset, height);
                offset += height;
                Some(bound)
            })
            .collect();

        let mut tracker = SectionTracker::new(0.0);
        for _ in 0..500 {
            let k = rng.random_range(0..Section::COUNT);
            let bound = bounds[k].unwrap();
            let y = bound.offset_top + rng.random_range(0.0..bound.height);
            tracker.observe(y, &bounds);
            assert_eq!(tracker.current_index(), k, "scroll {} in section {}", y, k);
        }
    }
}
