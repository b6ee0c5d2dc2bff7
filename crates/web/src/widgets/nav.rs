//! Navigation: mobile menu toggle, scrolled navbar, smooth in-page links.

use std::cell::Cell;
use std::rc::Rc;

use mb_studio_core::config::SiteConfig;
use mb_studio_core::nav::{NavMenu, anchor_target, is_scrolled, scroll_destination};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, Scope, set_class};
use crate::error::{Result, WidgetError};

/// Wire whichever navigation pieces the page has.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when the page has no menu, navbar or
/// in-page link at all.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let mut wired = false;

    if let (Some(toggle), Some(menu)) = (document.find(".nav-toggle"), document.find(".nav-menu")) {
        wire_menu(toggle, menu)?;
        wired = true;
    }

    if let Some(navbar) = document.find(".navbar") {
        let threshold = config.scroll_threshold_px;
        let window = dom::window()?;
        dom::on(&window, "scroll", move |_: Event| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            set_class(&navbar, "scrolled", is_scrolled(scroll_y, threshold));
        })?;
        wired = true;
    }

    let anchors = document.find_all(r##"a[href^="#"]"##);
    for anchor in &anchors {
        wire_anchor(document, anchor, config.anchor_offset_px)?;
    }
    wired |= !anchors.is_empty();

    if wired {
        Ok(())
    } else {
        Err(WidgetError::Missing(".navbar"))
    }
}

fn wire_menu(toggle: Element, menu: Element) -> Result<()> {
    let state = Rc::new(Cell::new(NavMenu::default()));

    let apply = {
        let (toggle, menu) = (toggle.clone(), menu.clone());
        move |open: bool| {
            set_class(&menu, "active", open);
            set_class(&toggle, "active", open);
        }
    };

    {
        let state = Rc::clone(&state);
        let apply = apply.clone();
        dom::on(&toggle, "click", move |_: Event| {
            let mut menu = state.get();
            let open = menu.toggle();
            state.set(menu);
            apply(open);
        })?;
    }

    for link in menu.find_all(".nav-link") {
        let state = Rc::clone(&state);
        let apply = apply.clone();
        dom::on(&link, "click", move |_: Event| {
            let mut menu = state.get();
            menu.close();
            state.set(menu);
            apply(false);
        })?;
    }
    Ok(())
}

fn wire_anchor(document: &Document, anchor: &Element, offset: f64) -> Result<()> {
    let document = document.clone();
    let link = anchor.clone();
    dom::on(anchor, "click", move |event: Event| {
        let href = link.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };
        event.prevent_default();

        let Some(target) = document.find(selector) else {
            tracing::debug!(selector, "anchor target not found");
            return;
        };
        let offset_top = target
            .dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| f64::from(el.offset_top()));

        let options = ScrollToOptions::new();
        options.set_top(scroll_destination(offset_top, offset));
        options.set_behavior(ScrollBehavior::Smooth);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_scroll_to_options(&options);
        }
    })
}
