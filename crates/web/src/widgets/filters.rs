//! Gallery filter buttons and the shop's category select.

use std::cell::Cell;
use std::rc::Rc;

use mb_studio_core::config::{GalleryTiming, SiteConfig};
use mb_studio_core::filter::CategoryFilter;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlSelectElement};

use crate::dom::{self, Scope, set_class, set_style};
use crate::error::{Result, WidgetError};
use crate::timer::{after_or_log, ms};

fn categories(items: &[Element]) -> Vec<Option<String>> {
    items
        .iter()
        .map(|item| item.get_attribute("data-category"))
        .collect()
}

fn visibility(filter: &CategoryFilter, categories: &[Option<String>]) -> Vec<bool> {
    filter.visibility(categories.iter().map(Option::as_deref))
}

/// Wire the gallery's `.filter-btn` buttons.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when there are no filter buttons.
pub fn init_gallery(document: &Document, config: &SiteConfig) -> Result<()> {
    let buttons = Rc::new(document.require_all(".filter-btn")?);
    let items = Rc::new(document.find_all(".gallery-item"));
    let categories = Rc::new(categories(&items));
    // Bumped on every click so fades scheduled by an earlier click are
    // dropped instead of fighting the newer one.
    let generation = Rc::new(Cell::new(0_u64));
    let timing = config.gallery;

    for button in buttons.iter() {
        let clicked = button.clone();
        let buttons = Rc::clone(&buttons);
        let items = Rc::clone(&items);
        let categories = Rc::clone(&categories);
        let generation = Rc::clone(&generation);

        dom::on(button, "click", move |_: Event| {
            let value = clicked.get_attribute("data-filter").unwrap_or_default();
            let filter = CategoryFilter::parse(&value);
            tracing::debug!(filter = %value, "gallery filter");

            for button in buttons.iter() {
                set_class(button, "active", false);
            }
            set_class(&clicked, "active", true);

            let current = generation.get().wrapping_add(1);
            generation.set(current);
            for (item, shown) in items.iter().zip(visibility(&filter, &categories)) {
                fade(item, shown, timing, &generation, current);
            }
        })?;
    }
    Ok(())
}

fn fade(item: &Element, shown: bool, timing: GalleryTiming, generation: &Rc<Cell<u64>>, current: u64) {
    let delay = if shown {
        set_style(item, "display", "block");
        timing.show_delay_ms
    } else {
        set_style(item, "opacity", "0");
        set_style(item, "transform", "scale(0.8)");
        timing.hide_delay_ms
    };

    let item = item.clone();
    let generation = Rc::clone(generation);
    after_or_log(ms(delay), move || {
        if generation.get() != current {
            return;
        }
        if shown {
            set_style(&item, "opacity", "1");
            set_style(&item, "transform", "scale(1)");
        } else {
            set_style(&item, "display", "none");
        }
    });
}

/// Wire the shop's `#category-filter` select.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when the select or the product cards
/// are absent.
pub fn init_products(document: &Document) -> Result<()> {
    let select = dom::by_id(document, "category-filter", "#category-filter")?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| WidgetError::Missing("#category-filter"))?;
    let cards = document.require_all(".product-card")?;
    let categories = categories(&cards);

    let control = select.clone();
    dom::on(&select, "change", move |_: Event| {
        let filter = CategoryFilter::parse(&control.value());
        for (card, shown) in cards.iter().zip(visibility(&filter, &categories)) {
            set_style(card, "display", if shown { "block" } else { "none" });
        }
    })
}
