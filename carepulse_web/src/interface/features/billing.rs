use carepulse_core::{
    accordion::AccordionMode,
    content::{self, FaqIcon},
};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdCalculator, LdCreditCard, LdFileText, LdReceipt, LdShield,
};

use crate::interface::{
    accordion::{Accordion, AccordionContent, AccordionItem, AccordionTrigger},
    customers_table::CustomersTableCard,
};

#[component]
#[allow(non_snake_case)]
fn FaqGlyph(icon: FaqIcon) -> Element {
    match icon {
        FaqIcon::Receipt => rsx! {
            Icon { class: "m-auto", width: 16, height: 16, icon: LdReceipt }
        },
        FaqIcon::Calculator => rsx! {
            Icon { class: "m-auto", width: 16, height: 16, icon: LdCalculator }
        },
        FaqIcon::CreditCard => rsx! {
            Icon { class: "m-auto", width: 16, height: 16, icon: LdCreditCard }
        },
        FaqIcon::FileText => rsx! {
            Icon { class: "m-auto", width: 16, height: 16, icon: LdFileText }
        },
        FaqIcon::Shield => rsx! {
            Icon { class: "m-auto", width: 16, height: 16, icon: LdShield }
        },
    }
}

#[component]
#[allow(non_snake_case)]
pub fn BillingFeatures() -> Element {
    let items = use_hook(content::faq_items)?;

    rsx! {
        section { class: "bg-zinc-100 py-20 dark:bg-zinc-950",
            div { class: "mx-auto max-w-5xl px-4 md:px-6",
                div { class: "flex flex-col gap-10 md:flex-row md:gap-16",
                    div { class: "md:w-1/3",
                        div { class: "sticky top-20",
                            h2 { class: "mt-4 text-3xl font-bold", "Billing & GST-Compliant Invoicing" }
                            p { class: "mt-4 text-zinc-500",
                                "Streamline your clinic's financial operations with automated billing, GST compliance, and comprehensive payment management."
                            }
                        }
                    }
                    div { class: "md:w-2/3",
                        Accordion {
                            mode: AccordionMode::Single { collapsible: true },
                            class: "w-full space-y-2",
                            for item in items {
                                AccordionItem {
                                    key: "{item.id}",
                                    value: item.id.to_string(),
                                    class: "rounded-lg border border-zinc-200 bg-white px-4 shadow-xs dark:border-zinc-800 dark:bg-zinc-900",
                                    AccordionTrigger { class: "w-full items-center py-5 hover:no-underline",
                                        div { class: "flex items-center gap-3",
                                            div { class: "flex size-6",
                                                FaqGlyph { icon: item.icon }
                                            }
                                            span { class: "text-left text-base", "{item.question}" }
                                        }
                                    }
                                    AccordionContent { class: "pb-5",
                                        div { class: "px-9",
                                            p { class: "text-base", "{item.answer}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "mt-16",
                    CustomersTableCard {}
                }
            }
        }
    }
}
