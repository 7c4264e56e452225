use carepulse_core::section::Section;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronRight};
use strum::IntoEnumIterator;

use super::navigation::use_scroll_navigation;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Down,
    Right,
}

#[component]
#[allow(non_snake_case)]
pub fn CircleNavButton(
    onclick: EventHandler<MouseEvent>,
    #[props(default = ArrowDirection::Down)] direction: ArrowDirection,
    #[props(default)] class: String,
    #[props(default)] label: String,
) -> Element {
    rsx! {
        button {
            class: format!(
                "flex h-10 w-10 cursor-pointer items-center justify-center rounded-full border-2 border-zinc-300 bg-white/80 shadow-lg backdrop-blur-sm transition-all duration-200 hover:scale-110 hover:bg-zinc-100 dark:border-zinc-700 dark:bg-zinc-950/80 dark:hover:bg-zinc-800 {class}",
            ),
            aria_label: label,
            onclick: move |evt| onclick.call(evt),
            match direction {
                ArrowDirection::Down => rsx! {
                    Icon { width: 20, height: 20, icon: LdChevronDown }
                },
                ArrowDirection::Right => rsx! {
                    Icon { width: 20, height: 20, icon: LdChevronRight }
                },
            }
        }
    }
}

/// Mobile-only button stepping through the sections, with a dot per section.
#[component]
#[allow(non_snake_case)]
pub fn FloatingNav() -> Element {
    let mut navigation = use_scroll_navigation();
    let current = navigation.current();
    let at_last = navigation.at_last();
    let (direction, rotation, label) = if at_last {
        (ArrowDirection::Right, "rotate-[-90deg]", "Back to top")
    } else {
        (ArrowDirection::Down, "", "Next section")
    };

    rsx! {
        div { class: "fixed bottom-6 right-6 z-50 lg:hidden",
            CircleNavButton {
                onclick: move |_| navigation.scroll_to_next_or_top(),
                direction,
                class: "transition-all duration-300 ease-in-out {rotation}",
                label,
            }
            div { class: "mt-3 flex flex-col items-center gap-1",
                for section in Section::iter() {
                    div {
                        key: "{section:?}",
                        class: format!(
                            "h-2 w-2 rounded-full transition-all duration-200 {}",
                            if section == current { "scale-125 bg-blue-600" } else { "bg-zinc-400/30" },
                        ),
                    }
                }
            }
        }
    }
}
