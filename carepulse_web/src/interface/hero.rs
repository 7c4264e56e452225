use carepulse_core::{config::LandingConfig, section::Section};
use dioxus::prelude::*;

use super::motion::{AnimatedGroup, TextEffect, TextTag};

#[component]
#[allow(non_snake_case)]
pub fn Hero() -> Element {
    let config = use_context::<LandingConfig>();

    rsx! {
        section { id: Section::Hero.id(), class: "relative",
            div { class: "relative pt-24",
                div { class: "mx-auto max-w-5xl px-6",
                    div { class: "sm:mx-auto lg:mr-auto lg:mt-0",
                        TextEffect {
                            tag: TextTag::H1,
                            delay: config.headline_delay,
                            class: "mt-8 max-w-2xl text-balance text-5xl font-medium md:text-6xl lg:mt-16",
                            "Next-Gen Healthcare at Your Fingertips"
                        }
                        TextEffect {
                            tag: TextTag::P,
                            delay: config.subtitle_delay,
                            class: "mt-8 max-w-2xl text-pretty text-lg text-zinc-600 dark:text-zinc-400",
                            "Experience revolutionary healthcare with AI-powered diagnostics, personalized treatment plans, and 24/7 virtual consultations with certified medical professionals."
                        }
                        AnimatedGroup {
                            delay: config.group_delay,
                            class: "mt-12 flex items-center gap-2",
                            div { class: "rounded-[14px] border border-zinc-200 bg-zinc-900/10 p-0.5 dark:border-zinc-800 dark:bg-white/10",
                                a {
                                    href: "#consultation",
                                    class: "block rounded-xl bg-blue-600 px-5 py-2.5 text-base font-medium text-white hover:bg-blue-700",
                                    span { class: "text-nowrap", "Book Consultation" }
                                }
                            }
                            a {
                                href: "#learn-more",
                                class: "rounded-xl px-5 py-2.5 text-base font-medium hover:bg-zinc-100 dark:hover:bg-zinc-800",
                                span { class: "text-nowrap", "Learn More" }
                            }
                        }
                    }
                }

                AnimatedGroup { delay: config.group_delay,
                    div { class: "relative -mr-56 mt-8 overflow-hidden px-2 sm:mr-0 sm:mt-12 md:mt-20",
                        div {
                            aria_hidden: "true",
                            class: "absolute inset-0 z-10 bg-gradient-to-b from-transparent from-35% to-white dark:to-zinc-950",
                        }
                        div { class: "relative mx-auto max-w-5xl overflow-hidden rounded-2xl border border-zinc-200 bg-white p-4 shadow-lg shadow-zinc-950/15 ring-1 ring-white dark:border-zinc-800 dark:bg-zinc-950 dark:ring-zinc-950",
                            img {
                                class: "relative aspect-[15/8] h-full w-full rounded-2xl object-cover",
                                src: "/images/hero.jpg",
                                alt: "Healthcare dashboard interface",
                                width: "2700",
                                height: "1440",
                            }
                        }
                    }
                }
            }
        }
    }
}
