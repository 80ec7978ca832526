//! Browser glue — the only module that touches raw web APIs.
//!
//! Everything here is page-lifetime: listeners and observer callbacks are
//! leaked on purpose (`forget`), matching a page that is never torn down.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use gloo::events::EventListener;
use gloo::render::request_animation_frame;
use gloo::timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use brochure_core::config::BehaviorConfig;
use brochure_core::scroll::SectionSpan;

pub fn window() -> Window {
    web_sys::window().expect("no window")
}

pub fn document() -> Document {
    window().document().expect("no document")
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// Monotonic milliseconds, same timeline as animation-frame timestamps.
pub fn now() -> f64 {
    window().performance().map(|p| p.now()).unwrap_or(0.0)
}

/// Optional embedded overrides: `<script type="application/json" id="site-config">`.
/// A malformed blob must never take the page down — warn and fall back.
pub fn discover_config() -> BehaviorConfig {
    let Some(el) = document().get_element_by_id("site-config") else {
        return BehaviorConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match BehaviorConfig::from_json_str(&raw) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring invalid embedded site config: {e:#}");
            BehaviorConfig::default()
        }
    }
}

/// Lock or unlock body scrolling while the mobile menu is open. The body
/// element sits outside the app root, so this is a direct style mutation.
pub fn set_body_scroll_lock(locked: bool) {
    let Some(body) = document().body() else { return };
    let style = body.style();
    if locked {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}

/// Smooth-scroll to the in-page element with `id`. Returns false when the id
/// resolves to nothing, so callers can let the click fall through untouched.
pub fn scroll_to_section(id: &str) -> bool {
    match document().get_element_by_id(id) {
        Some(el) => {
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            true
        }
        None => false,
    }
}

/// Animated scroll back to the document origin.
pub fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

/// Measure every `section[id]` in document order. Re-measured each scroll
/// tick so layout changes never stale the nav highlight.
pub fn section_spans() -> Vec<SectionSpan> {
    let mut spans = Vec::new();
    let Ok(list) = document().query_selector_all("section[id]") else {
        return spans;
    };
    for i in 0..list.length() {
        let Some(node) = list.item(i) else { continue };
        let Ok(el) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        spans.push(SectionSpan {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        });
    }
    spans
}

/// Page-lifetime scroll listener. gloo registers listeners passive by
/// default, so this never delays the browser's own scrolling.
pub fn on_scroll(mut handler: impl FnMut(f64) + 'static) {
    EventListener::new(&window(), "scroll", move |_| handler(scroll_y())).forget();
}

/// Debounced resize listener: the pending timer is cleared and re-armed on
/// every event, so only the trailing edge of a burst fires.
pub fn on_resize_debounced(debounce_ms: u32, handler: impl Fn(f64) + 'static) {
    let handler = Rc::new(handler);
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    EventListener::new(&window(), "resize", move |_| {
        let handler = Rc::clone(&handler);
        let mut slot = pending.borrow_mut();
        if let Some(timer) = slot.take() {
            timer.cancel();
        }
        *slot = Some(Timeout::new(debounce_ms, move || {
            handler(viewport_width())
        }));
    })
    .forget();
}

/// Document-level Escape key handler.
pub fn on_escape(handler: impl Fn() + 'static) {
    EventListener::new(&document(), "keydown", move |event| {
        if let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            if key_event.key() == "Escape" {
                handler();
            }
        }
    })
    .forget();
}

/// Watch every `[data-animate]` element. `on_first_visible` receives each
/// element's id when it intersects; answering true stops watching that
/// element (the one-shot transition).
pub fn observe_reveals(
    root_margin: &str,
    threshold: f64,
    mut on_first_visible: impl FnMut(String) -> bool + 'static,
) {
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if on_first_visible(target.id()) {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_root_margin(root_margin);
    init.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            if let Ok(list) = document().query_selector_all("[data-animate]") {
                for i in 0..list.length() {
                    if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                        observer.observe(&el);
                    }
                }
            }
            callback.forget();
        }
        Err(e) => web_sys::console::error_1(&e),
    }
}

/// Watch a single container and call `on_visible` the first time it crosses
/// `threshold`, then stop watching. Returns false when the selector matches
/// nothing (and no observer is created).
pub fn observe_once(selector: &str, threshold: f64, on_visible: impl FnOnce() + 'static) -> bool {
    let Ok(Some(container)) = document().query_selector(selector) else {
        return false;
    };

    let mut on_visible = Some(on_visible);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                if let Some(fire) = on_visible.take() {
                    observer.unobserve(&entry.target());
                    fire();
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&container);
            callback.forget();
            true
        }
        Err(e) => {
            web_sys::console::error_1(&e);
            false
        }
    }
}

/// Await the next animation frame; resolves to the frame timestamp (ms).
/// The suspension point between counter frames.
pub async fn next_frame() -> f64 {
    let (tx, rx) = oneshot::channel();
    let handle = request_animation_frame(move |timestamp| {
        let _ = tx.send(timestamp);
    });
    let timestamp = rx.await.unwrap_or_default();
    drop(handle);
    timestamp
}
