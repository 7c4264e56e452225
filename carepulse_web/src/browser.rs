//! Thin wrappers over the handful of browser APIs the page touches.

use std::rc::Rc;

use carepulse_core::{
    section::{Section, SectionBounds},
    showcase::ShowcaseGeometry,
    theme::{MemoryStore, PreferenceStore, Theme},
};
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{
    AddEventListenerOptions, Event, EventTarget, HtmlElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, Storage,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Window,
    Document,
}

impl ListenerTarget {
    fn resolve(self) -> Option<EventTarget> {
        let window = web_sys::window()?;
        match self {
            ListenerTarget::Window => Some(window.into()),
            ListenerTarget::Document => window.document().map(Into::into),
        }
    }
}

/// Subscribe a passive DOM listener for the lifetime of the calling component.
///
/// Only the handler passed on the first render is registered; handlers should
/// capture signals rather than plain values.
pub fn use_event_listener(
    target: ListenerTarget,
    event: &'static str,
    handler: impl FnMut(Event) + 'static,
) {
    let listener = use_hook(move || {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);

        match target.resolve() {
            Some(t) => {
                if let Err(err) = t.add_event_listener_with_callback_and_add_event_listener_options(
                    event,
                    closure.as_ref().unchecked_ref(),
                    &options,
                ) {
                    warn!("failed to subscribe to {event}: {err:?}");
                }
            }
            None => warn!("no {target:?} to subscribe to {event}"),
        }
        Rc::new(closure)
    });

    use_drop(move || {
        let Some(t) = target.resolve() else {
            return;
        };
        let closure: &Closure<dyn FnMut(Event)> = &listener;
        if t
            .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_err()
        {
            debug!("listener for {event} was already gone");
        }
    });
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn section_bounds(section: Section) -> Option<SectionBounds> {
    let element = element_by_id(section.id())?;
    Some(SectionBounds::new(
        element.offset_top() as f64,
        element.offset_height() as f64,
    ))
}

pub fn showcase_geometry(id: &str) -> Option<ShowcaseGeometry> {
    let rect = element_by_id(id)?.get_bounding_client_rect();
    Some(ShowcaseGeometry {
        top: rect.top(),
        bottom: rect.bottom(),
        height: rect.height(),
        viewport_height: viewport_height(),
    })
}

/// `offsetLeft` and `offsetWidth` of an element.
pub fn horizontal_extent(id: &str) -> Option<(f64, f64)> {
    let element = element_by_id(id)?;
    Some((element.offset_left() as f64, element.offset_width() as f64))
}

/// Smoothly scroll the element to the top of the viewport. Returns false when
/// there is no such element.
pub fn scroll_into_view(id: &str) -> bool {
    let Some(element) = element_by_id(id) else {
        return false;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// First coordinates of a touch event's touch list.
pub fn touch_point(event: &Event, changed: bool) -> Option<(f64, f64)> {
    let event = event.dyn_ref::<web_sys::TouchEvent>()?;
    let list = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    let touch = list.get(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}

pub struct LocalStorage(Storage);

impl LocalStorage {
    pub fn open() -> Option<Self> {
        web_sys::window()?.local_storage().ok().flatten().map(Self)
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(err) = self.0.set_item(key, value) {
            warn!("failed to persist {key}: {err:?}");
        }
    }
}

/// Local storage when the browser allows it, otherwise a per-session map.
pub enum ThemeStore {
    Local(LocalStorage),
    Memory(MemoryStore),
}

impl ThemeStore {
    pub fn open() -> Self {
        match LocalStorage::open() {
            Some(storage) => ThemeStore::Local(storage),
            None => {
                warn!("localStorage unavailable, theme will not persist");
                ThemeStore::Memory(MemoryStore::default())
            }
        }
    }
}

impl PreferenceStore for ThemeStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            ThemeStore::Local(store) => store.get(key),
            ThemeStore::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match self {
            ThemeStore::Local(store) => store.set(key, value),
            ThemeStore::Memory(store) => store.set(key, value),
        }
    }
}

/// Toggle the `dark` class on the root element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Err(err) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
        warn!("failed to apply {} theme: {err:?}", theme.as_str());
    }
}
