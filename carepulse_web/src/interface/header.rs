use carepulse_core::{config::LandingConfig, section::Section};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdHeartPulse, LdMenu, LdX};

use super::{navigation::use_scroll_navigation, theme::ThemeToggle};
use crate::browser::{self, ListenerTarget, use_event_listener};

#[component]
#[allow(non_snake_case)]
fn MenuLinks(class: &'static str, mut menu_open: Signal<bool>) -> Element {
    let mut navigation = use_scroll_navigation();

    rsx! {
        ul { class,
            for section in Section::menu() {
                li { key: "{section:?}",
                    button {
                        class: "block text-zinc-500 hover:text-zinc-900 dark:text-zinc-400 dark:hover:text-white duration-150 cursor-pointer",
                        onclick: move |_| {
                            navigation.scroll_to_section(section);
                            menu_open.set(false);
                        },
                        span { {section.label()} }
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn HeroHeader() -> Element {
    let config = use_context::<LandingConfig>();
    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);

    use_event_listener(ListenerTarget::Window, "scroll", move |_| {
        let now = config.header_scrolled(browser::scroll_y());
        if now != *scrolled.peek() {
            scrolled.set(now);
        }
    });

    let open = menu_open();

    rsx! {
        header {
            nav {
                class: format!(
                    "fixed z-20 w-full border-b border-zinc-200 dark:border-zinc-800 transition-colors duration-150 {}",
                    if scrolled() { "bg-white/50 dark:bg-zinc-950/50 backdrop-blur-3xl" } else { "" },
                ),
                div { class: "mx-auto max-w-5xl px-6 transition-all duration-300",
                    div { class: "relative flex flex-wrap items-center justify-between gap-6 py-3 lg:gap-0 lg:py-4",
                        div { class: "flex w-full items-center justify-between gap-12 lg:w-auto",
                            a {
                                href: "/",
                                aria_label: "home",
                                class: "flex items-center gap-2 text-lg font-semibold text-blue-600 dark:text-blue-400",
                                Icon { width: 22, icon: LdHeartPulse }
                                "CarePulse"
                            }

                            button {
                                class: "relative z-20 -m-2.5 -mr-4 block cursor-pointer p-2.5 lg:hidden",
                                aria_label: if open { "Close Menu" } else { "Open Menu" },
                                onclick: move |_| menu_open.toggle(),
                                if open {
                                    Icon { width: 24, icon: LdX }
                                } else {
                                    Icon { width: 24, icon: LdMenu }
                                }
                            }

                            div { class: "hidden lg:block",
                                MenuLinks { class: "flex gap-8 text-sm", menu_open }
                            }
                        }

                        div {
                            class: format!(
                                "mb-6 w-full flex-wrap items-center justify-end space-y-8 rounded-3xl border border-zinc-200 bg-white p-6 shadow-2xl shadow-zinc-300/20 dark:border-zinc-800 dark:bg-zinc-950 dark:shadow-none md:flex-nowrap lg:m-0 lg:w-fit lg:gap-6 lg:space-y-0 lg:border-transparent lg:bg-transparent lg:p-0 lg:shadow-none dark:lg:bg-transparent {}",
                                if open { "block lg:flex" } else { "hidden lg:flex" },
                            ),
                            div { class: "lg:hidden",
                                MenuLinks { class: "space-y-6 text-base", menu_open }
                            }
                            div { class: "flex w-full flex-col space-y-3 sm:flex-row sm:gap-3 sm:space-y-0 md:w-fit lg:items-center",
                                ThemeToggle {}
                                a {
                                    href: "#login",
                                    class: "rounded-lg border border-zinc-300 px-3 py-1.5 text-sm font-medium hover:bg-zinc-100 dark:border-zinc-700 dark:hover:bg-zinc-800",
                                    "Login"
                                }
                                a {
                                    href: "#signup",
                                    class: "rounded-lg bg-blue-600 px-3 py-1.5 text-sm font-medium text-white hover:bg-blue-700",
                                    "Sign Up"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
