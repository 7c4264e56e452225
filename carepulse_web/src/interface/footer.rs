use carepulse_core::section::Section;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdHeartPulse;

use super::navigation::use_scroll_navigation;

#[component]
#[allow(non_snake_case)]
pub fn Footer() -> Element {
    let mut navigation = use_scroll_navigation();

    rsx! {
        footer { class: "border-t border-zinc-200 py-16 dark:border-zinc-800",
            div { class: "mx-auto max-w-5xl px-6",
                button {
                    class: "mx-auto flex items-center gap-2 text-lg font-semibold text-blue-600 dark:text-blue-400 cursor-pointer",
                    aria_label: "go home",
                    onclick: move |_| navigation.scroll_to_section(Section::Hero),
                    Icon { width: 22, height: 22, icon: LdHeartPulse }
                    "CarePulse"
                }
                div { class: "my-8 flex flex-wrap justify-center gap-6 text-sm",
                    for section in Section::menu() {
                        button {
                            key: "{section:?}",
                            class: "block text-zinc-500 duration-150 hover:text-blue-600 cursor-pointer",
                            onclick: move |_| navigation.scroll_to_section(section),
                            {section.label()}
                        }
                    }
                }
                span { class: "block text-center text-sm text-zinc-500",
                    "© 2025 CarePulse, All rights reserved"
                }
            }
        }
    }
}
