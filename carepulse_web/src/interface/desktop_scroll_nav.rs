use carepulse_core::section::Section;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp};
use strum::IntoEnumIterator;

use super::navigation::use_scroll_navigation;

/// Desktop-only vertical rail: one dot per section plus previous/next.
#[component]
#[allow(non_snake_case)]
pub fn DesktopScrollNav() -> Element {
    let mut navigation = use_scroll_navigation();
    let current = navigation.current();
    let can_previous = navigation.can_go_previous();
    let can_next = navigation.can_go_next();

    let step_class = |enabled: bool| {
        format!(
            "flex h-8 w-8 items-center justify-center rounded-full border border-zinc-300 bg-white/80 backdrop-blur-sm transition-all duration-200 dark:border-zinc-700 dark:bg-zinc-950/80 {}",
            if enabled {
                "cursor-pointer hover:scale-110 hover:bg-zinc-100 dark:hover:bg-zinc-800"
            } else {
                "cursor-not-allowed opacity-40"
            },
        )
    };

    rsx! {
        nav { class: "fixed right-8 top-1/2 z-40 hidden -translate-y-1/2 flex-col items-center gap-3 lg:flex",
            button {
                class: step_class(can_previous),
                disabled: !can_previous,
                aria_label: "Previous section",
                onclick: move |_| navigation.scroll_to_previous(),
                Icon { width: 16, height: 16, icon: LdChevronUp }
            }
            for section in Section::iter() {
                button {
                    key: "{section:?}",
                    class: "group relative flex items-center cursor-pointer",
                    aria_label: section.label(),
                    onclick: move |_| navigation.scroll_to_section(section),
                    span { class: "pointer-events-none absolute right-6 whitespace-nowrap rounded bg-zinc-900 px-2 py-1 text-xs text-white opacity-0 transition-opacity group-hover:opacity-100 dark:bg-white dark:text-zinc-900",
                        {section.label()}
                    }
                    span {
                        class: format!(
                            "block rounded-full transition-all duration-200 {}",
                            if section == current {
                                "h-3 w-3 bg-blue-600"
                            } else {
                                "h-2 w-2 bg-zinc-400/50 group-hover:bg-zinc-500"
                            },
                        ),
                    }
                }
            }
            button {
                class: step_class(can_next),
                disabled: !can_next,
                aria_label: "Next section",
                onclick: move |_| navigation.scroll_to_next(),
                Icon { width: 16, height: 16, icon: LdChevronDown }
            }
        }
    }
}
