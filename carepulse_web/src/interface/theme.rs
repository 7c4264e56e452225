use carepulse_core::theme::Theme;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdMoon, LdSun};
use dioxus_logger::tracing::info;

use crate::browser::{self, ThemeStore};

#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: Signal<Theme>,
    store: Signal<ThemeStore>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    pub fn toggle(&mut self) {
        let current = *self.theme.peek();
        let theme = current.toggle_in(&mut *self.store.write());
        info!("theme set to {}", theme.as_str());
        browser::apply_theme(theme);
        self.theme.set(theme);
    }
}

/// Reads the persisted theme once and applies it to the document root.
pub fn use_theme_provider() -> ThemeContext {
    let store = use_signal(ThemeStore::open);
    let theme = use_signal(|| Theme::load(&*store.peek()));
    use_hook(move || browser::apply_theme(*theme.peek()));
    use_context_provider(|| ThemeContext { theme, store })
}

#[component]
#[allow(non_snake_case)]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<ThemeContext>();
    let dark = theme.theme().is_dark();

    rsx! {
        button {
            class: "rounded-lg p-2 text-zinc-600 hover:bg-zinc-100 dark:text-zinc-300 dark:hover:bg-zinc-800 transition duration-150 cursor-pointer",
            aria_label: if dark { "Switch to light mode" } else { "Switch to dark mode" },
            onclick: move |_| theme.toggle(),
            if dark {
                Icon { width: 18, icon: LdSun }
            } else {
                Icon { width: 18, icon: LdMoon }
            }
        }
    }
}
