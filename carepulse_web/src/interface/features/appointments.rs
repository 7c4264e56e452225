use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdUsers};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CirclePattern {
    None,
    Border,
    Primary,
    Blue,
}

impl CirclePattern {
    fn class(self) -> &'static str {
        match self {
            CirclePattern::None => "border-blue-600",
            CirclePattern::Border => {
                "border-blue-600 bg-[repeating-linear-gradient(-45deg,theme(colors.zinc.300),theme(colors.zinc.300)_1px,transparent_1px,transparent_4px)]"
            }
            CirclePattern::Primary => {
                "border-blue-600 bg-white dark:bg-zinc-950 bg-[repeating-linear-gradient(-45deg,theme(colors.blue.600),theme(colors.blue.600)_1px,transparent_1px,transparent_4px)]"
            }
            CirclePattern::Blue => {
                "z-[1] border-blue-500 bg-white dark:bg-zinc-950 bg-[repeating-linear-gradient(-45deg,theme(colors.blue.500),theme(colors.blue.500)_1px,transparent_1px,transparent_4px)]"
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AppointmentFeatures() -> Element {
    rsx! {
        section { class: "bg-zinc-50 py-8 dark:bg-transparent sm:py-16 md:py-24 lg:py-32",
            div { class: "mx-auto max-w-sm px-4 sm:max-w-2xl sm:px-6 lg:max-w-6xl lg:px-8",
                div { class: "mb-8 text-center sm:mb-12",
                    h2 { class: "mb-3 text-2xl font-bold sm:mb-4 sm:text-3xl lg:text-4xl",
                        "Smart Appointments"
                    }
                }

                div { class: "mx-auto grid gap-4 sm:gap-6 lg:grid-cols-2",
                    FeatureCard { class: "mb-4 sm:mb-6 lg:mb-0",
                        CardHeading {
                            icon: rsx! { Icon { width: 16, height: 16, icon: LdCalendar } },
                            title: "Smart Scheduling",
                            description: "AI-powered appointment booking with automated conflict resolution and optimal time slot suggestions.",
                        }
                        div { class: "relative mb-4 border-t border-dashed border-zinc-300 dark:border-zinc-700 sm:mb-6 lg:mb-0",
                            div { class: "absolute inset-0 bg-[radial-gradient(125%_125%_at_50%_0%,transparent_40%,theme(colors.blue.600),theme(colors.white)_100%)]" }
                            div { class: "aspect-[4/3] p-1 px-3 sm:aspect-[76/59] sm:px-6",
                                img {
                                    class: "h-full w-full rounded object-cover shadow",
                                    src: "/images/smart.png",
                                    alt: "appointment scheduling interface",
                                    width: "1207",
                                    height: "929",
                                }
                            }
                        }
                    }

                    FeatureCard { class: "mb-4 sm:mb-6 lg:mb-0",
                        CardHeading {
                            icon: rsx! { Icon { width: 16, height: 16, icon: LdUsers } },
                            title: "Patient Queue Management",
                            description: "Real-time patient tracking with digital queue management and automated notifications.",
                        }
                        div { class: "p-3 sm:p-6",
                            div { class: "relative mb-4 sm:mb-6 lg:mb-0",
                                div { class: "aspect-[4/3] border border-zinc-200 dark:border-zinc-800 sm:aspect-[76/59]",
                                    img {
                                        class: "h-full w-full rounded object-cover",
                                        src: "/images/real.png",
                                        alt: "patient queue dashboard",
                                        width: "1207",
                                        height: "929",
                                    }
                                }
                            }
                        }
                    }

                    FeatureCard { class: "mt-4 p-4 sm:mt-6 sm:p-6 lg:col-span-2 lg:mt-4",
                        p { class: "mx-auto my-4 max-w-sm text-balance text-center text-lg font-semibold sm:my-6 sm:max-w-md sm:text-xl lg:max-w-lg lg:text-2xl",
                            "Comprehensive OPD management with automated workflows and real-time insights."
                        }
                        div { class: "flex flex-wrap justify-center gap-3 overflow-hidden sm:gap-4 lg:gap-6",
                            CircularUI {
                                label: "Appointments",
                                circles: vec![CirclePattern::Border, CirclePattern::Border],
                            }
                            CircularUI {
                                label: "Queue Status",
                                circles: vec![CirclePattern::None, CirclePattern::Primary],
                            }
                            CircularUI {
                                label: "Patient Flow",
                                circles: vec![CirclePattern::Blue, CirclePattern::None],
                            }
                            CircularUI {
                                label: "Analytics",
                                circles: vec![CirclePattern::Primary, CirclePattern::None],
                                class: "hidden sm:block",
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
fn FeatureCard(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "group relative border border-zinc-200 bg-white shadow-sm shadow-zinc-950/5 dark:border-zinc-800 dark:bg-zinc-900 {class}",
            // corner decorators
            span { class: "absolute -left-px -top-px block size-2 border-l-2 border-t-2 border-blue-600" }
            span { class: "absolute -right-px -top-px block size-2 border-r-2 border-t-2 border-blue-600" }
            span { class: "absolute -bottom-px -left-px block size-2 border-b-2 border-l-2 border-blue-600" }
            span { class: "absolute -bottom-px -right-px block size-2 border-b-2 border-r-2 border-blue-600" }
            {children}
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn CardHeading(icon: Element, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div { class: "p-3 pb-2 sm:p-6 sm:pb-3",
            span { class: "flex items-center gap-2 text-zinc-500",
                {icon}
                span { class: "text-sm sm:text-base", "{title}" }
            }
            p { class: "mt-4 text-lg font-semibold leading-tight sm:mt-6 sm:text-xl lg:mt-8 lg:text-2xl",
                "{description}"
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn CircularUI(
    label: &'static str,
    circles: Vec<CirclePattern>,
    #[props(default)] class: String,
) -> Element {
    rsx! {
        div { class: "min-w-0 flex-shrink-0 {class}",
            div { class: "mx-auto size-fit rounded-2xl bg-gradient-to-b from-zinc-200 to-transparent p-px dark:from-zinc-800",
                div { class: "relative flex aspect-square w-fit items-center -space-x-2 rounded-[15px] bg-gradient-to-b from-white to-zinc-100/25 p-2 dark:from-zinc-950 dark:to-zinc-900/25 sm:-space-x-3 sm:p-3 lg:-space-x-4 lg:p-4",
                    for (i, circle) in circles.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: format!(
                                "size-5 rounded-full border sm:size-6 lg:size-7 xl:size-8 {}",
                                circle.class(),
                            ),
                        }
                    }
                }
            }
            span { class: "mt-1 block truncate text-center text-xs text-zinc-500 sm:mt-1.5 sm:text-sm",
                "{label}"
            }
        }
    }
}
