use carepulse_core::content::{CUSTOMERS, Customer, PaymentStatus, row_summary};
use dioxus::prelude::*;

fn badge_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "bg-lime-500/15 text-lime-800 dark:text-lime-300",
        PaymentStatus::Cancelled => "bg-red-500/15 text-red-800 dark:text-red-300",
        PaymentStatus::Refunded => "bg-yellow-500/15 text-yellow-800 dark:text-yellow-300",
    }
}

/// Responsive table inside a card, scrolling horizontally on narrow screens.
#[component]
#[allow(non_snake_case)]
pub fn CustomersTableCard(
    #[props(default = "Customers".to_string())] title: String,
    #[props(default = "New users by First user primary channel group (Default Channel Group)".to_string())]
    subtitle: String,
    #[props(default = CUSTOMERS.to_vec())] customers: Vec<Customer>,
    #[props(default)] class: String,
) -> Element {
    let summary = row_summary(customers.len());

    rsx! {
        section {
            class: "relative w-full overflow-hidden rounded-2xl border border-zinc-200 bg-white shadow-md shadow-zinc-950/5 ring-1 ring-zinc-950/5 dark:border-zinc-800 dark:bg-zinc-950 {class}",
            aria_label: "{title}",
            div { class: "space-y-1 border-b border-zinc-200 p-6 dark:border-zinc-800",
                div { class: "flex items-center gap-1.5",
                    for _ in 0..3 {
                        span { class: "size-2 rounded-full border border-black/5 bg-zinc-200 dark:bg-zinc-700" }
                    }
                }
                h2 { class: "text-lg font-semibold leading-none tracking-tight", "{title}" }
                p { class: "text-sm text-zinc-500", "{subtitle}" }
            }

            div { class: "overflow-x-auto",
                table { class: "w-full min-w-[640px] border-collapse text-sm",
                    thead { class: "sticky top-0 z-10 bg-zinc-100/50 backdrop-blur-sm dark:bg-zinc-900/50",
                        tr { class: "text-zinc-500",
                            th { class: "w-12 px-3 py-3 text-left font-medium", "#" }
                            th { class: "min-w-[120px] px-3 py-3 text-left font-medium", "Date" }
                            th { class: "min-w-[120px] px-3 py-3 text-left font-medium", "Status" }
                            th { class: "min-w-[220px] px-3 py-3 text-left font-medium", "Customer" }
                            th { class: "min-w-[120px] px-3 py-3 pr-4 text-right font-medium", "Revenue" }
                        }
                    }
                    tbody {
                        for (row, customer) in customers.iter().enumerate() {
                            tr {
                                key: "{customer.id}",
                                class: "border-b border-zinc-200 transition-colors last:border-0 hover:bg-zinc-100/30 dark:border-zinc-800 dark:hover:bg-zinc-900/30",
                                td { class: "px-3 py-2 text-zinc-500", "{row + 1}" }
                                td { class: "whitespace-nowrap px-3 py-2", "{customer.date}" }
                                td { class: "px-3 py-2",
                                    span {
                                        class: format!(
                                            "rounded-full px-2 py-1 text-xs font-medium {}",
                                            badge_class(customer.status),
                                        ),
                                        {customer.status.label()}
                                    }
                                }
                                td { class: "px-3 py-2",
                                    div { class: "flex items-center gap-2",
                                        div { class: "size-7 overflow-hidden rounded-full ring-1 ring-zinc-200 dark:ring-zinc-800",
                                            img {
                                                src: customer.avatar,
                                                alt: customer.name,
                                                width: "28",
                                                height: "28",
                                                "loading": "lazy",
                                            }
                                        }
                                        span { class: "truncate font-medium", "{customer.name}" }
                                    }
                                }
                                td { class: "px-3 py-2 pr-4 text-right font-medium tabular-nums",
                                    "{customer.revenue}"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "flex items-center justify-between border-t border-zinc-200 p-4 text-xs text-zinc-500 dark:border-zinc-800",
                span { "{summary}" }
                span { "Updated just now" }
            }
        }
    }
}
