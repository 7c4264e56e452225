use carepulse_core::content::ActivityRing;
use dioxus::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ActivityCard(title: &'static str, rings: Vec<ActivityRing>) -> Element {
    rsx! {
        div { class: "w-full rounded-xl border border-zinc-200 bg-white shadow-sm dark:border-zinc-800 dark:bg-zinc-900",
            div { class: "p-6 pb-0",
                h3 { class: "text-lg font-semibold", "{title}" }
            }
            div { class: "space-y-6 p-6",
                for ring in rings {
                    div { key: "{ring.label}", class: "space-y-2",
                        div { class: "flex items-center justify-between",
                            span { class: "text-sm font-medium text-zinc-500", "{ring.label}" }
                            span { class: "text-sm font-bold",
                                "{ring.value}{ring.unit} / {ring.max}{ring.unit}"
                            }
                        }
                        div { class: "h-2 w-full overflow-hidden rounded-full bg-zinc-200 dark:bg-zinc-800",
                            div {
                                class: "h-full rounded-full transition-all",
                                style: format!(
                                    "width: {}%; background-color: {};",
                                    ring.percentage().min(100.0),
                                    ring.color,
                                ),
                            }
                        }
                        div { class: "text-right text-xs text-zinc-500",
                            {format!("{:.0}% complete", ring.percentage())}
                        }
                    }
                }
            }
        }
    }
}
