use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{
    HtmlElement, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};
use yew::prelude::*;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Starts fetching `url` and applies it as the element's background only
/// once the transfer finishes. A failed load applies nothing: no retry,
/// no placeholder.
fn load_background(target: HtmlElement, url: &'static str) {
    let Ok(image) = HtmlImageElement::new() else {
        return;
    };
    let onload = Closure::once(move || {
        gloo_console::log!("background loaded:", url);
        let _ = target
            .style()
            .set_property("background-image", &format!("url('{}')", url));
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    // The browser holds the image (and through it this callback) alive
    // until the load settles.
    onload.forget();
    image.set_src(url);
}

/// Fetches the background as soon as the component mounts, decoupled from
/// the critical render path: the image loads asynchronously and is only
/// painted once complete.
#[hook]
pub fn use_eager_background(target: NodeRef, url: &'static str) {
    use_effect_with_deps(
        move |_| {
            if let Some(element) = target.cast::<HtmlElement>() {
                load_background(element, url);
            }
            || ()
        },
        (),
    );
}

/// Defers the fetch until the element comes within 200px of the viewport,
/// then loads once and stops watching.
#[hook]
pub fn use_lazy_background(target: NodeRef, url: &'static str) {
    use_effect_with_deps(
        move |_| {
            let watcher = target
                .cast::<HtmlElement>()
                .and_then(|element| watch_once(element, url));
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

fn watch_once(
    element: HtmlElement,
    url: &'static str,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                        continue;
                    };
                    observer.unobserve(&target);
                    load_background(target, url);
                }
            }
        },
    ));

    let options = IntersectionObserverInit::new();
    options.set_root_margin("200px");
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
    observer.observe(&element);

    Some((observer, callback))
}
