//! Shop cart: the slide-out panel, add buttons and line rendering.

use std::cell::RefCell;
use std::rc::Rc;

use mb_studio_core::Price;
use mb_studio_core::cart::{Cart, CartSummary, EMPTY_CART_MESSAGE};
use mb_studio_core::config::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::dom::{self, Scope, lock_scroll, set_class};
use crate::error::{Result, WidgetError};
use crate::timer::after_or_log;

const ADD_LABEL: &str = "Add to Cart";
const ADDED_LABEL: &str = "Added!";

/// The parts of the panel that show cart contents. Any of them may be
/// missing from a page; rendering skips the whole panel if one is.
struct Panel {
    document: Document,
    count: Option<Element>,
    items: Option<Element>,
    total: Option<Element>,
}

impl Panel {
    fn render(&self, summary: &CartSummary) {
        let (Some(count), Some(items), Some(total)) = (&self.count, &self.items, &self.total)
        else {
            return;
        };
        count.set_text_content(Some(&summary.badge()));
        if let Err(err) = self.render_lines(items, summary) {
            tracing::warn!(error = %err, "could not render cart lines");
        }
        total.set_text_content(Some(&summary.total_label()));
    }

    fn render_lines(&self, items: &Element, summary: &CartSummary) -> Result<()> {
        items.set_text_content(None);
        if summary.lines.is_empty() {
            let empty = self.element("p", "empty-cart")?;
            empty.set_text_content(Some(EMPTY_CART_MESSAGE));
            items.append_child(&empty)?;
            return Ok(());
        }

        for line in &summary.lines {
            let row = self.element("div", "cart-item")?;
            let info = self.element("div", "cart-item-info")?;
            let name = self.document.create_element("h4")?;
            name.set_text_content(Some(&line.name));
            let detail = self.document.create_element("p")?;
            detail.set_text_content(Some(&line.detail));
            info.append_child(&name)?;
            info.append_child(&detail)?;

            let remove = self.element("button", "remove-item")?;
            remove.set_attribute("data-name", &line.name)?;
            let icon = self.element("i", "fas fa-times")?;
            remove.append_child(&icon)?;

            row.append_child(&info)?;
            row.append_child(&remove)?;
            items.append_child(&row)?;
        }
        Ok(())
    }

    fn element(&self, tag: &str, class: &str) -> Result<Element> {
        let element = self.document.create_element(tag)?;
        element.set_class_name(class);
        Ok(element)
    }
}

/// Wire the cart panel and the product grid's add buttons.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when the page has neither a cart button
/// nor any add-to-cart button.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let add_buttons = document.find_all(".add-to-cart");
    let cart_button = document.find(".cart-btn");
    if add_buttons.is_empty() && cart_button.is_none() {
        return Err(WidgetError::Missing(".cart-btn"));
    }

    let cart = Rc::new(RefCell::new(Cart::new()));
    let panel = Rc::new(Panel {
        document: document.clone(),
        count: document.find(".cart-count"),
        items: document.find(".cart-items"),
        total: document.find(".total-amount"),
    });

    wire_sidebar(document, cart_button)?;

    for button in add_buttons {
        let cart = Rc::clone(&cart);
        let panel = Rc::clone(&panel);
        let feedback = config.cart_feedback();
        let source = button.clone();
        dom::on(&button, "click", move |_: Event| {
            let Some((name, price)) = product_of(&source) else {
                tracing::warn!("add-to-cart button outside a product card");
                return;
            };
            cart.borrow_mut().add_item(name, price);
            panel.render(&cart.borrow().summary());

            source.set_text_content(Some(ADDED_LABEL));
            let button = source.clone();
            after_or_log(feedback, move || button.set_text_content(Some(ADD_LABEL)));
        })?;
    }

    // One delegated listener covers every remove button the panel renders.
    if let Some(items) = panel.items.clone() {
        dom::on(&items, "click", move |event: Event| {
            let Some(button) = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|target| target.closest(".remove-item").ok().flatten())
            else {
                return;
            };
            let name = button.get_attribute("data-name").unwrap_or_default();
            if cart.borrow_mut().remove_item(&name).is_some() {
                panel.render(&cart.borrow().summary());
            }
        })?;
    }
    Ok(())
}

fn wire_sidebar(document: &Document, cart_button: Option<Element>) -> Result<()> {
    let Some(sidebar) = document.find(".cart-sidebar") else {
        return Ok(());
    };
    let overlay = document.find(".cart-overlay");

    let show = {
        let document = document.clone();
        let overlay = overlay.clone();
        move |open: bool| {
            set_class(&sidebar, "active", open);
            if let Some(overlay) = &overlay {
                set_class(overlay, "active", open);
            }
            lock_scroll(&document, open);
        }
    };

    if let Some(button) = cart_button {
        let show = show.clone();
        dom::on(&button, "click", move |_: Event| show(true))?;
    }
    for closer in document.find(".close-cart").into_iter().chain(overlay) {
        let show = show.clone();
        dom::on(&closer, "click", move |_: Event| show(false))?;
    }
    Ok(())
}

/// Name and price from the `.product-card` around an add button. A price
/// label without a dollar amount reads as zero.
fn product_of(button: &Element) -> Option<(String, Price)> {
    let card = button.closest(".product-card").ok().flatten()?;
    let name = dom::text(&card.find("h3")?);
    let price = card
        .find(".product-price")
        .map_or(Price::ZERO, |label| Price::parse_label(&dom::text(&label)));
    Some((name, price))
}
