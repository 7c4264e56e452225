use carepulse_core::chart::{
    HEALTH_METRICS, HealthChart, HealthMetric, MetricKind, PADDING, PATIENT_SAMPLES, VIEW_HEIGHT,
    VIEW_WIDTH,
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdArrowDown, LdArrowUp, LdHeart, LdThermometer, LdUser,
};
use dioxus_logger::tracing::info;

#[component]
#[allow(non_snake_case)]
fn MetricIcon(kind: MetricKind) -> Element {
    let icon = match kind {
        MetricKind::BloodPressure => rsx! {
            Icon { width: 16, height: 16, icon: LdActivity }
        },
        MetricKind::HeartRate => rsx! {
            Icon { width: 16, height: 16, icon: LdHeart }
        },
        MetricKind::Temperature => rsx! {
            Icon { width: 16, height: 16, icon: LdThermometer }
        },
        MetricKind::Visits => rsx! {
            Icon { width: 16, height: 16, icon: LdUser }
        },
    };

    rsx! {
        span { style: format!("color: {};", kind.color()), {icon} }
    }
}

#[component]
#[allow(non_snake_case)]
fn MetricButton(metric: HealthMetric, mut selected: Signal<MetricKind>) -> Element {
    let active = selected() == metric.kind;
    let improved = metric.is_improvement();

    rsx! {
        button {
            class: format!(
                "flex-1 cursor-pointer border-b border-zinc-200 p-4 text-start transition-all hover:bg-zinc-100/50 dark:border-zinc-800 dark:hover:bg-zinc-800/50 lg:border-b-0 lg:border-r lg:last:border-r-0 {}",
                if active { "bg-zinc-100/50 dark:bg-zinc-800/50" } else { "" },
            ),
            onclick: move |_| {
                info!("chart switched to {}", metric.kind.label());
                selected.set(metric.kind);
            },
            div { class: "mb-2 flex items-center justify-between",
                div { class: "flex items-center gap-2",
                    MetricIcon { kind: metric.kind }
                    span { class: "text-sm text-zinc-500", {metric.kind.label()} }
                }
                span {
                    class: format!(
                        "inline-flex items-center gap-0.5 rounded-md px-2 py-0.5 text-xs font-medium {}",
                        if improved {
                            "bg-blue-600 text-white"
                        } else {
                            "bg-zinc-100 text-zinc-700 dark:bg-zinc-800 dark:text-zinc-300"
                        },
                    ),
                    if improved {
                        Icon { width: 12, height: 12, icon: LdArrowUp }
                    } else {
                        Icon { width: 12, height: 12, icon: LdArrowDown }
                    }
                    {metric.change_label()}
                }
            }
            div { class: "text-2xl font-bold", {metric.kind.format(metric.value)} }
            div { class: "mt-1 text-xs text-zinc-500",
                {format!("from {}", metric.kind.format(metric.previous_value))}
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn HealthLineChart(kind: ReadOnlySignal<MetricKind>) -> Element {
    let chart = use_memo(move || HealthChart::build(kind(), &PATIENT_SAMPLES));
    let Some(chart) = chart() else {
        return rsx! {};
    };
    let color = chart.kind.color();

    rsx! {
        div { class: "flex h-96 w-full items-center justify-center",
            svg { view_box: HealthChart::view_box(), class: "h-full w-full",
                defs {
                    pattern {
                        id: "dotGrid",
                        x: "0",
                        y: "0",
                        width: "20",
                        height: "20",
                        "patternUnits": "userSpaceOnUse",
                        circle {
                            cx: "10",
                            cy: "10",
                            r: "1",
                            fill: "currentColor",
                            fill_opacity: "0.3",
                        }
                    }
                }
                rect {
                    class: "text-zinc-400",
                    x: PADDING,
                    y: "0",
                    width: VIEW_WIDTH - PADDING * 2.0,
                    height: VIEW_HEIGHT - PADDING,
                    fill: "url(#dotGrid)",
                }

                for (i, grid_line) in chart.grid.iter().enumerate() {
                    g { key: "{i}", class: "text-zinc-400",
                        line {
                            x1: PADDING,
                            y1: grid_line.y,
                            x2: VIEW_WIDTH - PADDING,
                            y2: grid_line.y,
                            stroke: "currentColor",
                            stroke_opacity: "0.2",
                            stroke_dasharray: "4,4",
                        }
                        text {
                            x: PADDING - 10.0,
                            y: grid_line.y + 4.0,
                            text_anchor: "end",
                            class: "fill-zinc-500 text-xs",
                            "{grid_line.label}"
                        }
                    }
                }

                path {
                    d: "{chart.path}",
                    fill: "none",
                    stroke: color,
                    stroke_width: "2",
                }

                for (i, (x, y)) in chart.points.iter().enumerate() {
                    circle {
                        key: "{i}",
                        cx: *x,
                        cy: *y,
                        r: "4",
                        fill: "white",
                        stroke: color,
                        stroke_width: "2",
                    }
                }

                for label in chart.date_labels.iter() {
                    text {
                        key: "{label.x}",
                        x: label.x,
                        y: VIEW_HEIGHT - 15.0,
                        text_anchor: "middle",
                        class: "fill-zinc-500 text-xs",
                        "{label.text}"
                    }
                }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn PatientRecords() -> Element {
    let selected = use_signal(|| MetricKind::BloodPressure);

    rsx! {
        section { class: "px-4 py-16 md:py-32",
            div { class: "mx-auto max-w-5xl",
                div { class: "mb-8 text-center sm:mb-12",
                    h2 { class: "mb-3 text-2xl font-bold sm:mb-4 sm:text-3xl lg:text-4xl",
                        "Patient Records & History"
                    }
                    p { class: "mx-auto max-w-3xl text-base text-zinc-600 dark:text-zinc-300 sm:text-lg lg:text-xl",
                        "Comprehensive patient health tracking with real-time vital signs monitoring and historical data analysis"
                    }
                }

                div { class: "w-full rounded-xl border border-zinc-200 bg-white shadow-sm dark:border-zinc-800 dark:bg-zinc-900",
                    div { class: "mb-5 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4",
                        for metric in HEALTH_METRICS {
                            MetricButton { key: "{metric.kind:?}", metric, selected }
                        }
                    }
                    div { class: "px-2.5 py-6",
                        HealthLineChart { kind: selected }
                    }
                }
            }
        }
    }
}
