use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

/// Elements that get the entrance animation the first time they scroll
/// into view.
const REVEAL_SELECTOR: &str =
    ".service-card, .room-card, .package-card, .about-image, .about-content";

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Watches the page's reveal targets and applies the `animate-in` class
/// the first time each one becomes sufficiently visible. Each target is
/// unobserved as soon as it reveals; a later scroll-out never reverts it.
///
/// When the platform prefers reduced motion the whole mechanism is left
/// uninstalled, so no element ever receives the `animate-ready` off-state
/// and everything stays visible by default.
#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let watcher = install_observer();
            move || {
                if let Some((observer, callback)) = watcher {
                    observer.disconnect();
                    drop(callback);
                }
            }
        },
        (),
    );
}

fn prefers_reduced_motion(window: &web_sys::Window) -> bool {
    matches!(
        window.match_media("(prefers-reduced-motion: reduce)"),
        Ok(Some(query)) if query.matches()
    )
}

fn install_observer() -> Option<(IntersectionObserver, ObserverCallback)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    if prefers_reduced_motion(&window) {
        return None;
    }

    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            // The platform may batch several elements into one invocation.
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1("animate-in");
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(0.1));
    options.set_root_margin("0px 0px -50px 0px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;

    if let Ok(targets) = document.query_selector_all(REVEAL_SELECTOR) {
        for index in 0..targets.length() {
            let Some(node) = targets.item(index) else { continue };
            let Ok(element) = node.dyn_into::<Element>() else { continue };
            let _ = element.class_list().add_1("animate-ready");
            observer.observe(&element);
        }
    }

    Some((observer, callback))
}
