mod phone_screen;

use carepulse_core::{
    config::LandingConfig,
    content::{self, FeatureSlide},
    gesture::{Swipe, SwipeDetector},
    showcase::FeatureShowcase as ShowcaseState,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdChevronLeft, LdChevronRight};
use dioxus_logger::tracing::{debug, info, warn};

use self::phone_screen::PhoneScreen;
use crate::browser::{self, ListenerTarget, use_event_listener};

const SHOWCASE_ID: &str = "feature-showcase";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    fn visible_points(self) -> usize {
        match self {
            Layout::Mobile => 3,
            Layout::Desktop => 4,
        }
    }
}

/// Scroll-pinned carousel walking through the product features.
///
/// While the tall wrapper scrolls past, the inner panel is pinned to the
/// viewport and the active slide follows the scroll progress. Arrow buttons,
/// the slide list and horizontal swipes override it until the next scroll.
#[component]
#[allow(non_snake_case)]
pub fn FeatureShowcase() -> Element {
    let slides = use_hook(content::feature_slides)?;
    let config = use_context::<LandingConfig>();

    let count = slides.len();
    let mut showcase = use_signal(|| ShowcaseState::new(count));
    let mut swipes = use_signal(|| SwipeDetector::new(config.swipe_threshold));

    use_event_listener(ListenerTarget::Window, "scroll", move |_| {
        let Some(geometry) = browser::showcase_geometry(SHOWCASE_ID) else {
            return;
        };
        let before = *showcase.peek();
        let mut after = before;
        after.observe(geometry);
        if after != before {
            debug!("showcase progress {:.2}", geometry.progress());
            if after.current() != before.current() {
                info!("feature {} in view", after.current() + 1);
            }
            showcase.set(after);
        }
    });

    use_event_listener(ListenerTarget::Document, "touchstart", move |event| {
        if let Some((x, y)) = browser::touch_point(&event, false) {
            swipes.write().touch_start(x, y);
        }
    });

    use_event_listener(ListenerTarget::Document, "touchend", move |event| {
        let Some((x, y)) = browser::touch_point(&event, true) else {
            return;
        };
        let swipe = swipes.write().touch_end(x, y);
        if !showcase.peek().is_pinned() {
            return;
        }
        match swipe {
            Some(Swipe::Left) => showcase.write().next(),
            Some(Swipe::Right) => showcase.write().previous(),
            _ => {}
        }
    });

    let state = showcase();
    let Some(slide) = slides.get(state.current()) else {
        return rsx! {};
    };

    rsx! {
        div { id: SHOWCASE_ID, class: "relative min-h-[500vh]",
            div {
                class: format!(
                    "transition-all duration-300 {}",
                    if state.is_pinned() { "fixed top-0 left-0 w-full z-50" } else { "relative" },
                ),
                section { class: "bg-white px-4 py-12 dark:bg-zinc-950 md:px-6 md:py-20",
                    div { class: "mx-auto max-w-7xl",
                        // mobile
                        div { class: "block space-y-8 lg:hidden",
                            div { class: "flex justify-center",
                                div { class: "relative h-96 w-48 rounded-[2.5rem] bg-black p-1.5 shadow-2xl",
                                    div { class: "relative h-full w-full overflow-hidden rounded-[2rem]",
                                        div { class: "absolute left-1/2 top-0 z-10 h-5 w-24 -translate-x-1/2 rounded-b-xl bg-black" }
                                        PhoneScreen { index: state.current(), title: slide.title.to_string() }
                                    }
                                }
                            }
                            div { class: "space-y-4 text-center",
                                SlideSummary { slide: slide.clone(), index: state.current(), layout: Layout::Mobile }
                                ArrowButtons { showcase, centered: true }
                            }
                            div { class: "space-y-2",
                                h3 { class: "mb-4 text-center text-lg font-semibold", "Feature Showcase" }
                                div { class: "grid grid-cols-1 gap-2",
                                    SlideList { slides: slides.clone(), showcase, layout: Layout::Mobile }
                                }
                            }
                        }

                        // desktop
                        div { class: "hidden items-center gap-8 lg:grid lg:grid-cols-12",
                            div { class: "space-y-6 lg:col-span-4",
                                SlideSummary { slide: slide.clone(), index: state.current(), layout: Layout::Desktop }
                                ArrowButtons { showcase, centered: false }
                            }
                            div { class: "flex justify-center lg:col-span-4",
                                div { class: "relative h-[520px] w-64 rounded-[3rem] bg-black p-2 shadow-2xl",
                                    div { class: "relative h-full w-full overflow-hidden rounded-[2.5rem]",
                                        div { class: "absolute left-1/2 top-0 z-10 h-6 w-32 -translate-x-1/2 rounded-b-2xl bg-black" }
                                        PhoneScreen { index: state.current(), title: slide.title.to_string() }
                                    }
                                }
                            }
                            div { class: "lg:col-span-4",
                                div { class: "space-y-1",
                                    h3 { class: "mb-6 text-lg font-semibold", "Feature Showcase" }
                                    SlideList { slides: slides.clone(), showcase, layout: Layout::Desktop }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn SlideSummary(slide: FeatureSlide<'static>, index: usize, layout: Layout) -> Element {
    let (title_class, list_class) = match layout {
        Layout::Mobile => (
            "text-2xl font-bold leading-tight",
            "mx-auto max-w-md space-y-2 text-left",
        ),
        Layout::Desktop => ("text-3xl font-bold leading-tight", "space-y-3"),
    };

    rsx! {
        div { class: "text-sm font-medium text-blue-500", "Feature No.{index + 1} -" }
        h2 { class: title_class, "{slide.title}" }
        ul { class: list_class,
            for (i, point) in slide.bullet_points.iter().take(layout.visible_points()).enumerate() {
                li { key: "{i}", class: "flex items-start gap-2 text-zinc-600 dark:text-zinc-400",
                    span { class: "mt-2 h-1 w-1 flex-shrink-0 rounded-full bg-zinc-400" }
                    span { class: "text-sm leading-relaxed", "{point}" }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn ArrowButtons(mut showcase: Signal<ShowcaseState>, centered: bool) -> Element {
    let button_class = "flex h-10 w-10 items-center justify-center rounded-full border border-zinc-300 hover:bg-zinc-100 dark:border-zinc-700 dark:hover:bg-zinc-800 cursor-pointer";

    rsx! {
        div {
            class: format!(
                "flex items-center gap-4 pt-4 {}",
                if centered { "justify-center" } else { "" },
            ),
            button {
                class: button_class,
                aria_label: "Previous feature",
                onclick: move |_| showcase.write().previous(),
                Icon { width: 16, icon: LdChevronLeft }
            }
            button {
                class: button_class,
                aria_label: "Next feature",
                onclick: move |_| showcase.write().next(),
                Icon { width: 16, icon: LdChevronRight }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn SlideList(
    slides: Vec<FeatureSlide<'static>>,
    mut showcase: Signal<ShowcaseState>,
    layout: Layout,
) -> Element {
    let current = showcase.read().current();

    rsx! {
        for (index, slide) in slides.iter().enumerate() {
            button {
                key: "{slide.id}",
                class: format!(
                    "relative w-full rounded-lg text-left transition-all duration-200 hover:bg-zinc-50 dark:hover:bg-zinc-900 cursor-pointer {} {}",
                    if layout == Layout::Mobile { "p-3" } else { "p-4" },
                    if current == index {
                        "border-l-4 border-blue-500 bg-blue-50 dark:bg-blue-950/40"
                    } else {
                        "border-l-4 border-transparent"
                    },
                ),
                onclick: move |_| {
                    if let Err(err) = showcase.write().select(index) {
                        warn!("{err}");
                    }
                },
                div { class: "ml-2",
                    div {
                        class: format!(
                            "font-medium transition-colors {}",
                            if current == index { "text-blue-600" } else { "text-zinc-700 dark:text-zinc-300" },
                        ),
                        match layout {
                            Layout::Mobile => rsx! { "Feature {slide.id} : {slide.title}" },
                            Layout::Desktop => rsx! { "Feature {slide.id}" },
                        }
                    }
                    if layout == Layout::Desktop {
                        div { class: "mt-1 text-sm text-zinc-500", "{slide.title}" }
                    }
                }
            }
        }
    }
}
