use carepulse_core::{content::DAILY_PERFORMANCE, tabs::TabSet};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdGauge, LdTrendingUp};

use crate::interface::{
    activity_card::ActivityCard,
    smooth_tab::{SmoothTab, TabSpec},
};

const TABS: [TabSpec; 3] = [
    TabSpec { id: "revenue", label: "Revenue" },
    TabSpec { id: "patients", label: "Patients" },
    TabSpec { id: "performance", label: "Performance" },
];

#[component]
#[allow(non_snake_case)]
fn StatRow(
    label: &'static str,
    value: &'static str,
    #[props(default)] accent: &'static str,
) -> Element {
    rsx! {
        div { class: "flex items-center justify-between rounded-lg bg-zinc-100 p-4 dark:bg-zinc-800",
            span { class: "text-sm font-medium", "{label}" }
            span { class: "text-lg font-bold {accent}", "{value}" }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn ClinicInsights() -> Element {
    let selection = use_signal(|| TabSet::new(TABS.iter().map(|t| t.id), Some("revenue")));

    let tab_content = match selection.read().active() {
        Some("patients") => rsx! {
            div { class: "space-y-4",
                StatRow { label: "Today's Appointments", value: "28", accent: "text-blue-600" }
                StatRow { label: "New Patients", value: "8" }
                div { class: "text-center text-sm font-medium text-blue-600", "↗ +23% patient retention" }
            }
        },
        Some("performance") => rsx! {
            div { class: "space-y-4",
                StatRow { label: "Satisfaction Score", value: "4.8/5", accent: "text-green-600" }
                StatRow { label: "Wait Time", value: "12 min" }
                div { class: "text-center text-sm font-medium text-green-600", "⭐ 98.5% satisfaction rate" }
            }
        },
        Some(_) => rsx! {
            div { class: "space-y-4",
                StatRow { label: "Daily Revenue", value: "$12,450", accent: "text-green-600" }
                StatRow { label: "Monthly Target", value: "$350,000" }
            }
        },
        None => rsx! {},
    };

    rsx! {
        section { class: "px-4 py-16 md:py-32",
            div { class: "mx-auto max-w-5xl",
                div { class: "mb-8 text-center sm:mb-12",
                    h2 { class: "mb-3 text-2xl font-bold sm:mb-4 sm:text-3xl lg:text-4xl",
                        "Clinic Insights & Reports"
                    }
                    p { class: "mx-auto max-w-3xl text-base text-zinc-600 dark:text-zinc-300 sm:text-lg lg:text-xl",
                        "Comprehensive analytics and reporting tools to optimize your clinic operations and patient care"
                    }
                }

                div { class: "grid border border-zinc-200 dark:border-zinc-800 md:grid-cols-2",
                    div {
                        div { class: "p-6 sm:p-12",
                            span { class: "flex items-center gap-2 text-zinc-500",
                                Icon { width: 16, height: 16, icon: LdGauge }
                                "Real-time Analytics Dashboard"
                            }
                            p { class: "mt-8 text-2xl font-semibold",
                                "Advanced analytics system to track patient flow, revenue, and clinic performance metrics."
                            }
                        }
                        div { class: "p-4",
                            SmoothTab { tabs: TABS.to_vec(), selection, {tab_content} }
                        }
                    }

                    div { class: "overflow-hidden border-t border-zinc-200 bg-zinc-50 p-6 dark:border-zinc-800 dark:bg-transparent sm:p-12 md:border-0 md:border-l",
                        div { class: "relative z-10",
                            span { class: "flex items-center gap-2 text-zinc-500",
                                Icon { width: 16, height: 16, icon: LdTrendingUp }
                                "Patient Insights & Trends"
                            }
                            p { class: "my-8 text-2xl font-semibold",
                                "Track patient satisfaction, appointment trends, and health outcomes for better care delivery."
                            }
                        }
                        div { aria_hidden: "true", class: "flex flex-col gap-8",
                            div {
                                div { class: "flex items-center gap-2",
                                    span { class: "flex size-5 items-center justify-center rounded-full border bg-blue-600",
                                        span { class: "text-xs font-bold text-white", "+" }
                                    }
                                    span { class: "text-xs text-zinc-500", "Today 2:30 PM" }
                                }
                                div { class: "mt-1.5 w-3/5 rounded-lg border border-zinc-200 bg-white p-3 text-xs dark:border-zinc-800 dark:bg-zinc-950",
                                    "Patient satisfaction score: 4.8/5 ⭐"
                                }
                            }
                            div {
                                div { class: "mb-1 ml-auto w-3/5 rounded-lg bg-blue-600 p-3 text-xs text-white",
                                    "Weekly appointments increased by 23%. Great progress on patient retention!"
                                }
                                span { class: "block text-right text-xs text-zinc-500", "Just now" }
                            }
                        }
                    }

                    div { class: "col-span-full border-y border-zinc-200 p-12 dark:border-zinc-800",
                        p { class: "text-center text-4xl font-semibold lg:text-7xl",
                            span { class: "text-green-600", "98.5%" }
                            " Patient Satisfaction"
                        }
                    }

                    div { class: "col-span-full p-6 md:p-12",
                        div { class: "mb-8",
                            span { class: "flex items-center gap-2 text-zinc-500",
                                Icon { width: 16, height: 16, icon: LdActivity }
                                "Live Clinic Activity"
                            }
                            p { class: "mt-4 text-2xl font-semibold",
                                "Monitor your clinic's activity in real-time. "
                                span { class: "text-zinc-500",
                                    "Track appointments, patient flow, and staff performance."
                                }
                            }
                        }
                        ActivityCard {
                            title: "Daily Performance Metrics",
                            rings: DAILY_PERFORMANCE.to_vec(),
                        }
                    }
                }
            }
        }
    }
}
