//! Contact form.

use mb_studio_core::forms::{CONTACT_THANKS, contact_marks, validate_contact};
use mb_studio_core::submission::{Submission, Submitter};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlFormElement};

use super::{RETRY_MESSAGE, SharedSubmitter, deliver};
use crate::dom::{self, Scope, set_class};
use crate::error::Result;

/// Wire `#contactForm`.
///
/// # Errors
///
/// Returns [`crate::error::WidgetError::Missing`] when the page has no
/// contact form.
pub fn init(document: &Document, submitter: SharedSubmitter) -> Result<()> {
    let form = dom::by_id(document, "contactForm", "#contactForm")?;
    let target = form.clone();
    dom::on(&form, "submit", move |event: Event| {
        event.prevent_default();
        submit(&target, submitter.as_ref());
    })
}

fn submit(form: &Element, submitter: &dyn Submitter) {
    let required = form.find_all("[required]");
    let snapshots: Vec<_> = required
        .iter()
        .map(|field| dom::snapshot(form, field))
        .collect();

    for (field, marked) in required.iter().zip(contact_marks(&snapshots)) {
        set_class(field, "error", marked);
    }

    if let Err(err) = validate_contact(&snapshots) {
        dom::alert(&err.to_string());
        return;
    }

    let submission = Submission::contact(&dom::form_entries(form));
    if !deliver(submitter, &submission) {
        dom::alert(RETRY_MESSAGE);
        return;
    }
    dom::alert(CONTACT_THANKS);
    if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
        form.reset();
    }
}
