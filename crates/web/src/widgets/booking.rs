//! Multi-step booking form.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use mb_studio_core::FieldSnapshot;
use mb_studio_core::booking::{BookingStepper, StepError, min_booking_date};
use mb_studio_core::submission::{Submission, Submitter};
use web_sys::{Document, Element, Event};

use super::{RETRY_MESSAGE, SharedSubmitter, deliver};
use crate::dom::{self, Scope, set_class, set_style};
use crate::error::{Result, WidgetError};

struct BookingForm {
    form: Element,
    steps: Vec<Element>,
    stepper: BookingStepper,
}

impl BookingForm {
    fn show(&self, index: usize) {
        for (i, step) in self.steps.iter().enumerate() {
            set_class(step, "active", i == index);
        }
    }

    /// Required controls of the current step. Steps are numbered from 1 in
    /// the markup; a step without a container has nothing to check.
    fn required_fields(&self) -> Vec<Element> {
        let selector = format!(r#".form-step[data-step="{}"]"#, self.stepper.current() + 1);
        self.form
            .find(&selector)
            .map(|container| container.find_all("[required]"))
            .unwrap_or_default()
    }

    fn snapshots(&self, fields: &[Element]) -> Vec<FieldSnapshot> {
        fields.iter().map(|field| dom::snapshot(&self.form, field)).collect()
    }

    fn reject(fields: &[Element], err: &StepError) {
        let StepError::MissingRequired { fields: missing, .. } = err else {
            tracing::debug!(error = %err, "booking transition ignored");
            return;
        };
        for field in missing.iter().filter_map(|&i| fields.get(i)) {
            set_class(field, "error", true);
            let target = field.clone();
            if let Err(err) = dom::once(field, "input", move |_| set_class(&target, "error", false)) {
                tracing::warn!(error = %err, "could not watch invalid field");
            }
        }
        dom::alert(&err.to_string());
    }
}

/// Wire `#bookingForm`.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when the page has no booking form or
/// the form has no steps.
pub fn init(document: &Document, submitter: SharedSubmitter) -> Result<()> {
    let form = dom::by_id(document, "bookingForm", "#bookingForm")?;
    let steps = form.find_all(".form-step");
    let stepper = BookingStepper::new(steps.len()).ok_or(WidgetError::Missing(".form-step"))?;

    let today = min_booking_date(Utc::now().date_naive());
    for input in form.find_all(r#"input[type="date"]"#) {
        input.set_attribute("min", &today)?;
    }

    let state = Rc::new(RefCell::new(BookingForm {
        form: form.clone(),
        steps,
        stepper,
    }));

    for button in form.find_all(".next-step") {
        let state = Rc::clone(&state);
        dom::on(&button, "click", move |_: Event| next(&state))?;
    }

    for button in form.find_all(".prev-step") {
        let state = Rc::clone(&state);
        dom::on(&button, "click", move |_: Event| {
            let mut booking = state.borrow_mut();
            match booking.stepper.previous() {
                Ok(step) => booking.show(step),
                Err(err) => tracing::debug!(error = %err, "booking back ignored"),
            }
        })?;
    }

    let document = document.clone();
    dom::on(&form, "submit", move |event: Event| {
        event.prevent_default();
        submit(&document, &state, submitter.as_ref());
    })
}

fn next(state: &Rc<RefCell<BookingForm>>) {
    let fields = state.borrow().required_fields();
    let snapshots = state.borrow().snapshots(&fields);

    let advanced = state.borrow_mut().stepper.next(&snapshots);
    match advanced {
        Ok(step) => state.borrow().show(step),
        Err(err) => BookingForm::reject(&fields, &err),
    }
}

fn submit(document: &Document, state: &Rc<RefCell<BookingForm>>, submitter: &dyn Submitter) {
    let fields = state.borrow().required_fields();
    let snapshots = state.borrow().snapshots(&fields);

    if let Err(err) = state.borrow().stepper.check_submit(&snapshots) {
        BookingForm::reject(&fields, &err);
        return;
    }

    let submission = Submission::booking(&dom::form_entries(&state.borrow().form));
    if !deliver(submitter, &submission) {
        dom::alert(RETRY_MESSAGE);
        return;
    }

    let mut booking = state.borrow_mut();
    if let Err(err) = booking.stepper.submit(&snapshots) {
        tracing::warn!(error = %err, "booking delivered but not committed");
        return;
    }
    set_style(&booking.form, "display", "none");
    match document.get_element_by_id("bookingSuccess") {
        Some(success) => set_style(&success, "display", "block"),
        None => tracing::debug!("no #bookingSuccess panel"),
    }
}
