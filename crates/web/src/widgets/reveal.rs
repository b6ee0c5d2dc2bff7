//! Scroll-triggered reveal for `[data-aos]` elements.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use mb_studio_core::config::SiteConfig;
use mb_studio_core::reveal::RevealTracker;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{Scope, set_class};
use crate::error::Result;

/// Class added once an element has scrolled into view.
pub const ANIMATE_CLASS: &str = "aos-animate";

/// Observe every `[data-aos]` element.
///
/// # Errors
///
/// Returns [`crate::error::WidgetError::Missing`] when nothing is marked for
/// animation, or [`crate::error::WidgetError::Js`] if the observer cannot be
/// created.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let elements = document.require_all("[data-aos]")?;
    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal.threshold));
    options.set_root_margin(&config.reveal.root_margin);

    let observed = elements.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = observed.iter().position(|element| *element == target) else {
                    continue;
                };
                if tracker.borrow_mut().observe(index, entry.is_intersecting()) {
                    set_class(&target, ANIMATE_CLASS, true);
                    observer.unobserve(&target);
                }
            }
            if tracker.borrow().is_done() {
                tracing::debug!("all reveal targets shown");
                observer.disconnect();
            }
        },
    );

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    Ok(())
}
