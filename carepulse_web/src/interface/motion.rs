use std::time::Duration;

use dioxus::prelude::*;
use dioxus_sdk::utils::timing::use_debounce;

/// Flips to true once `delay` has passed after mount. The timer belongs to the
/// calling component and is dropped with it.
fn use_reveal(delay: Duration) -> ReadOnlySignal<bool> {
    let mut visible = use_signal(|| false);
    let mut reveal = use_debounce(delay, move |_| visible.set(true));
    use_effect(move || reveal.action(()));
    visible.into()
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum TextTag {
    H1,
    P,
    #[default]
    Div,
}

#[component]
#[allow(non_snake_case)]
pub fn TextEffect(
    #[props(default)] tag: TextTag,
    #[props(default)] delay: Duration,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let visible = use_reveal(delay);
    let class = format!(
        "transition-all duration-1000 {} {}",
        if visible() {
            "opacity-100 blur-0 translate-y-0"
        } else {
            "opacity-0 blur-sm translate-y-3"
        },
        class,
    );

    match tag {
        TextTag::H1 => rsx! {
            h1 { class, {children} }
        },
        TextTag::P => rsx! {
            p { class, {children} }
        },
        TextTag::Div => rsx! {
            div { class, {children} }
        },
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AnimatedGroup(
    #[props(default = Duration::from_millis(750))] delay: Duration,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let visible = use_reveal(delay);

    rsx! {
        div {
            class: format!(
                "transition-all duration-1000 {} {}",
                if visible() { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-3" },
                class,
            ),
            {children}
        }
    }
}
