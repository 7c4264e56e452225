mod accordion;
mod activity_card;
mod customers_table;
mod desktop_scroll_nav;
mod feature_showcase;
mod features;
mod floating_nav;
mod footer;
mod header;
mod hero;
mod motion;
mod navigation;
mod smooth_tab;
mod theme;

use carepulse_core::{config::LandingConfig, section::Section};
use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use self::{
    desktop_scroll_nav::DesktopScrollNav,
    feature_showcase::FeatureShowcase,
    features::{AppointmentFeatures, BillingFeatures, ClinicInsights, PatientRecords},
    floating_nav::FloatingNav,
    footer::Footer,
    header::HeroHeader,
    hero::Hero,
    navigation::use_scroll_navigation_provider,
    theme::use_theme_provider,
};

#[component]
#[allow(non_snake_case)]
pub fn App() -> Element {
    let config = use_context_provider(LandingConfig::default);
    use_theme_provider();
    use_scroll_navigation_provider(config);

    use_hook(|| info!("landing page mounted"));

    rsx! {
        document::Stylesheet { href: asset!("/assets/tailwind.css") }
        style { "html {{ scroll-behavior: smooth; }} body {{ margin: 0; padding: 0; }}" }

        ErrorBoundary {
            handle_error: |errors: ErrorContext| rsx! {
                div { class: "flex min-h-screen items-center justify-center bg-white p-6 dark:bg-zinc-950",
                    div { class: "max-w-lg rounded-2xl border border-red-500/30 bg-red-500/10 p-6",
                        h1 { class: "mb-2 text-lg font-semibold text-red-700 dark:text-red-300",
                            "Something went wrong"
                        }
                        for error in errors.errors().iter() {
                            p { class: "font-mono text-sm text-red-800 dark:text-red-200", "{error}" }
                        }
                    }
                }
            },

            div { class: "min-h-screen bg-white text-zinc-900 dark:bg-zinc-950 dark:text-zinc-100",
                HeroHeader {}
                main { class: "overflow-hidden",
                    Hero {}
                    FeatureShowcase {}
                    div { id: Section::Appointments.id(), AppointmentFeatures {} }
                    div { id: Section::Insights.id(), ClinicInsights {} }
                    div { id: Section::Records.id(), PatientRecords {} }
                    div { id: Section::Billing.id(), BillingFeatures {} }
                }
                Footer {}

                FloatingNav {}
                DesktopScrollNav {}
            }
        }
    }
}
