//! Newsletter sign-up forms (there may be one per page footer and one in
//! the page body).

use mb_studio_core::forms::{NEWSLETTER_THANKS, validate_newsletter};
use mb_studio_core::submission::Submission;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

use super::{RETRY_MESSAGE, SharedSubmitter, deliver};
use crate::dom::{self, Scope};
use crate::error::Result;

/// Wire every `.newsletter-form`.
///
/// # Errors
///
/// Returns [`crate::error::WidgetError::Missing`] when there is no
/// newsletter form.
pub fn init(document: &Document, submitter: SharedSubmitter) -> Result<()> {
    for form in document.require_all(".newsletter-form")? {
        let Some(input) = form
            .find(r#"input[type="email"]"#)
            .and_then(|input| input.dyn_into::<HtmlInputElement>().ok())
        else {
            tracing::debug!("newsletter form without an email input");
            continue;
        };

        let submitter = SharedSubmitter::clone(&submitter);
        dom::on(&form, "submit", move |event: Event| {
            event.prevent_default();
            let email = match validate_newsletter(&input.value()) {
                Ok(email) => email,
                Err(err) => {
                    dom::alert(&err.to_string());
                    return;
                }
            };

            if deliver(submitter.as_ref(), &Submission::Newsletter { email }) {
                dom::alert(NEWSLETTER_THANKS);
                input.set_value("");
            } else {
                dom::alert(RETRY_MESSAGE);
            }
        })?;
    }
    Ok(())
}
