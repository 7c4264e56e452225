use carepulse_core::{
    config::LandingConfig,
    section::{Section, SectionBounds, SectionTracker},
};
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, info};
use dioxus_sdk::utils::timing::use_debounce;
use strum::IntoEnumIterator;

use crate::browser::{self, ListenerTarget, use_event_listener};

/// Shared handle to the page's section tracker.
///
/// Provided once by [`use_scroll_navigation_provider`] so the header, the
/// floating button and the side rail all agree on the current section.
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollNavigation {
    tracker: Signal<SectionTracker>,
    jumps: Signal<u64>,
}

fn refresh(mut tracker: Signal<SectionTracker>) {
    let bounds: Vec<Option<SectionBounds>> = Section::iter().map(browser::section_bounds).collect();
    let mut next = *tracker.peek();
    if next.observe(browser::scroll_y(), &bounds) {
        debug!("current section: {:?}", next.current());
        tracker.set(next);
    }
}

pub fn use_scroll_navigation_provider(config: LandingConfig) -> ScrollNavigation {
    let mut tracker = use_signal(|| SectionTracker::new(config.header_offset));
    let jumps = use_signal(|| 0u64);

    // unfreeze tracking once the smooth scroll has had time to land
    let mut end_jump = use_debounce(config.scroll_cooldown, move |_| {
        tracker.write().end_jump();
        refresh(tracker);
    });

    use_effect(move || {
        if *jumps.read() > 0 {
            end_jump.action(());
        }
    });

    use_event_listener(ListenerTarget::Window, "scroll", move |_| refresh(tracker));
    use_event_listener(ListenerTarget::Window, "resize", move |_| refresh(tracker));

    // initial check
    use_effect(move || refresh(tracker));

    use_context_provider(|| ScrollNavigation { tracker, jumps })
}

pub fn use_scroll_navigation() -> ScrollNavigation {
    use_context::<ScrollNavigation>()
}

impl ScrollNavigation {
    pub fn current(&self) -> Section {
        self.tracker.read().current()
    }

    pub fn can_go_next(&self) -> bool {
        self.tracker.read().can_go_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.tracker.read().can_go_previous()
    }

    pub fn at_last(&self) -> bool {
        self.tracker.read().at_last()
    }

    pub fn scroll_to_section(&mut self, section: Section) {
        let target = self.tracker.write().begin_jump(section);
        if !browser::scroll_into_view(target.id()) {
            debug!("no element #{} to scroll to", target.id());
            self.tracker.write().end_jump();
            return;
        }
        info!("scrolling to {}", target.label());
        *self.jumps.write() += 1;
    }

    pub fn scroll_to_next(&mut self) {
        let target = self.tracker.peek().next_target();
        if let Some(section) = target {
            self.scroll_to_section(section);
        }
    }

    pub fn scroll_to_previous(&mut self) {
        let target = self.tracker.peek().previous_target();
        if let Some(section) = target {
            self.scroll_to_section(section);
        }
    }

    /// Next section, wrapping back to the hero from the last one.
    pub fn scroll_to_next_or_top(&mut self) {
        let target = self.tracker.peek().cycle_target();
        self.scroll_to_section(target);
    }
}
