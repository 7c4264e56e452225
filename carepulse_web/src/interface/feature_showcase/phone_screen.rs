use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdCalendar, LdClock, LdFileText, LdGauge, LdHeart, LdShield, LdTrendingUp,
    LdUsers, LdVideo,
};

const GLASS: &str = "rounded-lg bg-white/20 p-3 backdrop-blur-sm";

#[component]
#[allow(non_snake_case)]
fn ScreenFrame(
    gradient: &'static str,
    heading: &'static str,
    caption: &'static str,
    icon: Element,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex h-full w-full flex-col bg-gradient-to-br p-6 {gradient}",
            div { class: "flex flex-1 flex-col items-center justify-center text-white",
                div { class: "mb-4 rounded-2xl bg-white/20 p-4 backdrop-blur-sm", {icon} }
                div { class: "mb-6 text-center",
                    h3 { class: "mb-2 text-lg font-bold", "{heading}" }
                    p { class: "text-sm opacity-90", "{caption}" }
                }
                {children}
            }
        }
    }
}

/// Mock app screen inside the phone frame for the slide at `index`.
#[component]
#[allow(non_snake_case)]
pub fn PhoneScreen(index: usize, title: String) -> Element {
    match index {
        0 => rsx! {
            ScreenFrame {
                gradient: "from-blue-500 via-purple-500 to-pink-500",
                heading: "Today's Schedule",
                caption: "5 appointments",
                icon: rsx! { Icon { width: 48, height: 48, icon: LdCalendar } },
                div { class: "w-full max-w-48 space-y-3",
                    for (time, patient) in [("9:00 AM", "John Doe"), ("11:30 AM", "Jane Smith"), ("2:00 PM", "Mike Johnson")] {
                        div { key: "{time}", class: GLASS,
                            div { class: "flex items-center justify-between",
                                div {
                                    p { class: "text-xs font-medium", "{time}" }
                                    p { class: "text-xs opacity-80", "{patient}" }
                                }
                                div { class: "h-2 w-2 rounded-full bg-green-400" }
                            }
                        }
                    }
                }
            }
        },
        1 => rsx! {
            ScreenFrame {
                gradient: "from-green-500 via-teal-500 to-blue-500",
                heading: "Health Vitals",
                caption: "Real-time monitoring",
                icon: rsx! { Icon { width: 48, height: 48, icon: LdActivity } },
                div { class: "grid w-full max-w-48 grid-cols-2 gap-3",
                    div { class: "{GLASS} text-center",
                        Icon { class: "mx-auto mb-1 text-red-300", width: 24, height: 24, icon: LdHeart }
                        p { class: "text-xs font-medium", "Heart Rate" }
                        p { class: "text-lg font-bold", "72 BPM" }
                    }
                    div { class: "{GLASS} text-center",
                        Icon { class: "mx-auto mb-1 text-blue-300", width: 24, height: 24, icon: LdTrendingUp }
                        p { class: "text-xs font-medium", "Blood Pressure" }
                        p { class: "text-lg font-bold", "120/80" }
                    }
                    div { class: "{GLASS} col-span-2 text-center",
                        div { class: "mb-2 flex items-center justify-center",
                            div { class: "h-2 w-16 overflow-hidden rounded-full bg-white/30",
                                div { class: "h-full w-3/4 rounded-full bg-green-400" }
                            }
                        }
                        p { class: "text-xs font-medium", "Overall Health Score: 85%" }
                    }
                }
            }
        },
        2 => rsx! {
            ScreenFrame {
                gradient: "from-indigo-500 via-purple-500 to-pink-500",
                heading: "Patient Records",
                caption: "Secure & Encrypted",
                icon: rsx! { Icon { width: 48, height: 48, icon: LdShield } },
                div { class: "w-full max-w-48 space-y-3",
                    RecordRow { label: "Medical History", count: "24 records",
                        Icon { width: 20, height: 20, icon: LdFileText }
                    }
                    RecordRow { label: "Lab Results", count: "8 reports",
                        Icon { width: 20, height: 20, icon: LdActivity }
                    }
                    RecordRow { label: "Appointments", count: "12 visits",
                        Icon { width: 20, height: 20, icon: LdCalendar }
                    }
                }
            }
        },
        3 => rsx! {
            ScreenFrame {
                gradient: "from-cyan-500 via-blue-500 to-indigo-500",
                heading: "Video Consultation",
                caption: "Dr. Sarah Wilson",
                icon: rsx! { Icon { width: 48, height: 48, icon: LdVideo } },
                div { class: "mb-4 w-full max-w-48 rounded-2xl bg-white/20 p-4 backdrop-blur-sm",
                    div { class: "mb-3 flex aspect-video items-center justify-center rounded-lg bg-white/30",
                        Icon { class: "text-white/70", width: 32, height: 32, icon: LdUsers }
                    }
                    div { class: "flex items-center justify-between text-sm",
                        span { class: "flex items-center gap-1",
                            div { class: "h-2 w-2 rounded-full bg-green-400" }
                            "Connected"
                        }
                        span { class: "flex items-center gap-1",
                            Icon { width: 12, height: 12, icon: LdClock }
                            "15:42"
                        }
                    }
                }
                div { class: "flex gap-3",
                    div { class: "flex h-10 w-10 items-center justify-center rounded-full bg-white/20 backdrop-blur-sm",
                        Icon { width: 20, height: 20, icon: LdVideo }
                    }
                    div { class: "flex h-10 w-10 items-center justify-center rounded-full bg-red-500/80 backdrop-blur-sm",
                        div { class: "h-5 w-5 rounded-sm bg-white" }
                    }
                }
            }
        },
        4 => rsx! {
            ScreenFrame {
                gradient: "from-orange-500 via-red-500 to-pink-500",
                heading: "Analytics Dashboard",
                caption: "This Month's Overview",
                icon: rsx! { Icon { width: 48, height: 48, icon: LdGauge } },
                div { class: "w-full max-w-48 space-y-3",
                    ProgressTile { label: "Patient Visits", value: "1,247", fill: "w-4/5 bg-green-400" }
                    ProgressTile { label: "Revenue", value: "$45.2K", fill: "w-3/5 bg-blue-400" }
                    div { class: "grid grid-cols-2 gap-2",
                        div { class: "rounded-lg bg-white/20 p-2 text-center backdrop-blur-sm",
                            p { class: "text-xs opacity-80", "Satisfaction" }
                            p { class: "text-sm font-bold", "4.8★" }
                        }
                        div { class: "rounded-lg bg-white/20 p-2 text-center backdrop-blur-sm",
                            p { class: "text-xs opacity-80", "Growth" }
                            p { class: "text-sm font-bold", "+12%" }
                        }
                    }
                }
            }
        },
        _ => rsx! {
            div { class: "flex h-full w-full items-center justify-center bg-gradient-to-br from-pink-500 via-purple-500 to-blue-600 text-white",
                div { class: "text-center",
                    div { class: "mb-2 text-lg font-semibold", "{title}" }
                    div { class: "text-sm opacity-80", "Feature {index + 1}" }
                }
            }
        },
    }
}

#[component]
#[allow(non_snake_case)]
fn RecordRow(label: &'static str, count: &'static str, children: Element) -> Element {
    rsx! {
        div { class: GLASS,
            div { class: "flex items-center gap-3",
                {children}
                div { class: "flex-1",
                    p { class: "text-sm font-medium", "{label}" }
                    p { class: "text-xs opacity-80", "{count}" }
                }
                div { class: "h-2 w-2 rounded-full bg-green-400" }
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
fn ProgressTile(label: &'static str, value: &'static str, fill: &'static str) -> Element {
    rsx! {
        div { class: GLASS,
            div { class: "mb-2 flex items-center justify-between",
                span { class: "text-sm font-medium", "{label}" }
                span { class: "text-lg font-bold", "{value}" }
            }
            div { class: "h-2 w-full overflow-hidden rounded-full bg-white/30",
                div { class: "h-full rounded-full {fill}" }
            }
        }
    }
}
