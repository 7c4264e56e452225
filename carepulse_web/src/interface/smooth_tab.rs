use carepulse_core::tabs::{IndicatorStyle, TabSet};
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};

use crate::browser;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TabSpec {
    pub id: &'static str,
    pub label: &'static str,
}

fn tab_element_id(id: &str) -> String {
    format!("smooth-tab-{id}")
}

/// Tab strip with a sliding indicator under the active tab. The caller
/// renders the content for `selection`'s active tab as children.
#[component]
#[allow(non_snake_case)]
pub fn SmoothTab(
    tabs: Vec<TabSpec>,
    mut selection: Signal<TabSet>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut indicator = use_signal(IndicatorStyle::default);

    use_effect(move || {
        let Some(active) = selection.read().active().map(tab_element_id) else {
            return;
        };
        match browser::horizontal_extent(&active) {
            Some((left, width)) => {
                debug!("tab indicator at {left}px, {width}px wide");
                indicator.set(IndicatorStyle { left, width });
            }
            None => debug!("tab #{active} not mounted yet"),
        }
    });

    rsx! {
        div { class: "w-full {class}",
            div { class: "relative",
                div { class: "flex space-x-1 rounded-lg bg-zinc-100 p-1 dark:bg-zinc-800",
                    for tab in tabs {
                        button {
                            key: "{tab.id}",
                            id: tab_element_id(tab.id),
                            class: format!(
                                "relative z-10 rounded-md px-3 py-1.5 text-sm font-medium transition-colors duration-200 focus-visible:outline-none focus-visible:ring-2 cursor-pointer {}",
                                if selection.read().is_active(tab.id) {
                                    "text-zinc-900 dark:text-white"
                                } else {
                                    "text-zinc-500 hover:text-zinc-900 dark:hover:text-white"
                                },
                            ),
                            onclick: move |_| {
                                if let Err(err) = selection.write().select(tab.id) {
                                    warn!("{err}");
                                }
                            },
                            "{tab.label}"
                        }
                    }
                    div {
                        class: "absolute bottom-1 top-1 rounded-md bg-white shadow-sm transition-all duration-300 ease-out dark:bg-zinc-950",
                        style: indicator.read().css(),
                    }
                }
            }
            div { class: "mt-4",
                div { class: "duration-200", {children} }
            }
        }
    }
}
