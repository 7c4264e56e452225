//! Context-driven accordion: an [`Accordion`] owns the open set, each
//! [`AccordionItem`] names the value its trigger and content refer to.

use carepulse_core::accordion::{AccordionError, AccordionMode, AccordionState};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdChevronDown;
use dioxus_logger::tracing::debug;

#[derive(Clone, Copy)]
struct AccordionContext {
    state: Signal<AccordionState>,
}

/// Tracks the enclosing item's `value` prop, so a renamed item toggles its new id.
#[derive(Clone, Copy)]
struct ItemValue(ReadOnlySignal<String>);

/// Accordion context and item value in scope for a trigger or content.
fn use_item(
    component: &'static str,
) -> Result<(AccordionContext, Option<ReadOnlySignal<String>>), AccordionError> {
    let context = try_use_context::<AccordionContext>();
    let item = try_use_context::<ItemValue>();
    let context = context.ok_or(AccordionError::OutsideContainer { component })?;
    Ok((context, item.map(|v| v.0)))
}

fn is_open(state: Signal<AccordionState>, item: Option<ReadOnlySignal<String>>) -> bool {
    item.is_some_and(|id| state.read().is_open(&id.read()))
}

/// Toggles the item in scope. A trigger with no enclosing item has nothing to toggle.
fn press(mut state: Signal<AccordionState>, item: Option<ReadOnlySignal<String>>) {
    let Some(id) = item else {
        return;
    };
    let id = id.peek();
    state.write().toggle(&id);
    debug!("accordion item {} toggled", id.as_str());
}

#[component]
#[allow(non_snake_case)]
pub fn Accordion(
    mode: AccordionMode,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let state = use_signal(|| AccordionState::new(mode));
    use_context_provider(|| AccordionContext { state });

    rsx! {
        div { class, {children} }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AccordionItem(
    value: ReadOnlySignal<String>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    use_context_provider(|| ItemValue(value));

    rsx! {
        div { class, "data-value": value(), {children} }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AccordionTrigger(#[props(default)] class: String, children: Element) -> Element {
    let (context, item) = use_item("AccordionTrigger")?;
    let state = context.state;
    let open = is_open(state, item);

    rsx! {
        button {
            class: format!(
                "flex flex-1 items-center justify-between py-4 font-medium transition-all hover:underline cursor-pointer {class}",
            ),
            aria_expanded: open,
            onclick: move |_| press(state, item),
            {children}
            Icon {
                class: format!(
                    "shrink-0 transition-transform duration-200 {}",
                    if open { "rotate-180" } else { "" },
                ),
                width: 16,
                height: 16,
                icon: LdChevronDown,
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AccordionContent(#[props(default)] class: String, children: Element) -> Element {
    let (context, item) = use_item("AccordionContent")?;
    let open = is_open(context.state, item);

    rsx! {
        div {
            class: format!(
                "overflow-hidden text-sm transition-all duration-200 {} {class}",
                if open { "max-h-96 opacity-100" } else { "max-h-0 opacity-0" },
            ),
            div { class: "pb-4 pt-0", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicBool, Ordering};

    use dioxus::dioxus_core::{NoOpMutations, ScopeId, VirtualDom};

    use super::*;

    type Pressed = (Signal<AccordionState>, Option<ReadOnlySignal<String>>);

    thread_local! {
        static CAUGHT: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static PRESSED: RefCell<Vec<Pressed>> = const { RefCell::new(Vec::new()) };
    }

    static RENAMED: AtomicBool = AtomicBool::new(false);

    fn capture(errors: ErrorContext) -> Element {
        CAUGHT.with_borrow_mut(|caught| {
            caught.extend(errors.errors().iter().map(|error| error.to_string()))
        });
        rsx! { "caught" }
    }

    /// Presses once on mount, the way a click on the trigger would, and keeps
    /// the handles for the test to inspect.
    #[component]
    #[allow(non_snake_case)]
    fn PressOnMount() -> Element {
        let (context, item) = use_item("PressOnMount")?;
        use_hook(move || {
            press(context.state, item);
            PRESSED.with_borrow_mut(|pressed| pressed.push((context.state, item)));
        });
        rsx! {}
    }

    fn settle(dom: &mut VirtualDom) {
        dom.rebuild_in_place();
        for _ in 0..3 {
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    fn open_items(dom: &VirtualDom, state: Signal<AccordionState>) -> Vec<String> {
        dom.in_runtime(|| state.peek().open_items().map(str::to_string).collect())
    }

    #[component]
    #[allow(non_snake_case)]
    fn TriggerWithoutAccordion() -> Element {
        rsx! {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| capture(errors),
                AccordionTrigger { "Orphan" }
            }
        }
    }

    #[test]
    fn test_trigger_outside_accordion_fails_to_render() {
        let mut dom = VirtualDom::new(TriggerWithoutAccordion);
        settle(&mut dom);

        let caught = CAUGHT.with_borrow(Clone::clone);
        assert!(
            caught
                .iter()
                .any(|error| error.contains("AccordionTrigger must be used within an Accordion")),
            "{caught:?}"
        );
    }

    #[component]
    #[allow(non_snake_case)]
    fn TriggerWithoutItem() -> Element {
        rsx! {
            ErrorBoundary {
                handle_error: |errors: ErrorContext| capture(errors),
                Accordion { mode: AccordionMode::Multiple,
                    AccordionTrigger { "No item" }
                    AccordionContent { "Hidden" }
                    PressOnMount {}
                }
            }
        }
    }

    #[test]
    fn test_trigger_without_item_stays_closed() {
        let mut dom = VirtualDom::new(TriggerWithoutItem);
        settle(&mut dom);

        assert!(CAUGHT.with_borrow(Vec::is_empty));
        let [(state, item)] = PRESSED.with_borrow(Clone::clone)[..] else {
            panic!("expected a single press");
        };
        assert!(item.is_none());
        assert!(open_items(&dom, state).is_empty());

        dom.in_runtime(|| {
            press(state, item);
            assert!(!is_open(state, item));
        });
        assert!(open_items(&dom, state).is_empty());
    }

    #[component]
    #[allow(non_snake_case)]
    fn RenamedItem() -> Element {
        let value = if RENAMED.load(Ordering::SeqCst) {
            "records"
        } else {
            "billing"
        };
        rsx! {
            Accordion { mode: AccordionMode::Multiple,
                AccordionItem { value: value.to_string(), PressOnMount {} }
            }
        }
    }

    #[test]
    fn test_renamed_item_toggles_new_value() {
        let mut dom = VirtualDom::new(RenamedItem);
        settle(&mut dom);

        let [(state, item)] = PRESSED.with_borrow(Clone::clone)[..] else {
            panic!("expected a single press");
        };
        assert_eq!(open_items(&dom, state), ["billing"]);

        RENAMED.store(true, Ordering::SeqCst);
        dom.mark_dirty(ScopeId::APP);
        for _ in 0..3 {
            dom.render_immediate(&mut NoOpMutations);
        }

        dom.in_runtime(|| {
            assert_eq!(item.map(|id| id.peek().clone()).as_deref(), Some("records"));
            press(state, item);
            assert!(is_open(state, item));
        });
        assert_eq!(open_items(&dom, state), ["billing", "records"]);
    }
}
