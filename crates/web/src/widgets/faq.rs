//! FAQ accordion.

use std::cell::RefCell;
use std::rc::Rc;

use mb_studio_core::accordion::Accordion;
use web_sys::{Document, Event};

use crate::dom::{self, Scope, set_class};
use crate::error::Result;

/// Wire every `.faq-item` that has a `.faq-question`.
///
/// # Errors
///
/// Returns [`crate::error::WidgetError::Missing`] when the page has no FAQ.
pub fn init(document: &Document) -> Result<()> {
    let items = Rc::new(document.require_all(".faq-item")?);
    let open = items.iter().position(|item| dom::has_class(item, "active"));
    let state = Rc::new(RefCell::new(Accordion::with_open(items.len(), open)));

    for (index, item) in items.iter().enumerate() {
        let Some(question) = item.find(".faq-question") else {
            continue;
        };
        let items = Rc::clone(&items);
        let state = Rc::clone(&state);
        dom::on(&question, "click", move |_: Event| {
            let open = state.borrow_mut().toggle(index);
            for (i, item) in items.iter().enumerate() {
                set_class(item, "active", open == Some(i));
            }
        })?;
    }
    Ok(())
}
