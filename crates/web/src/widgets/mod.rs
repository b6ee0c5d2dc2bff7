//! One module per widget. Each `init` returns
//! [`WidgetError::Missing`](crate::error::WidgetError::Missing) when the page
//! has no markup for it.

pub mod booking;
pub mod cart;
pub mod contact;
pub mod faq;
pub mod filters;
pub mod lightbox;
pub mod nav;
pub mod newsletter;
pub mod reveal;
pub mod services;
pub mod testimonials;

use std::rc::Rc;

use mb_studio_core::config::SiteConfig;
use mb_studio_core::submission::{LogSubmitter, Submission, Submitter};
use web_sys::Document;

use crate::error::report;

/// Shared hand-off for completed forms.
pub type SharedSubmitter = Rc<dyn Submitter>;

/// Wire every widget present on the page. A widget that fails is logged
/// and skipped.
pub fn init_all(document: &Document, config: &SiteConfig) {
    let submitter: SharedSubmitter = Rc::new(LogSubmitter);

    report("navigation", nav::init(document, config));
    report("testimonials", testimonials::init(document, config));
    report("faq", faq::init(document));
    report("gallery-filter", filters::init_gallery(document, config));
    report("product-filter", filters::init_products(document));
    report("booking", booking::init(document, Rc::clone(&submitter)));
    report("contact", contact::init(document, Rc::clone(&submitter)));
    report("newsletter", newsletter::init(document, Rc::clone(&submitter)));
    report("cart", cart::init(document, config));
    report("lightbox", lightbox::init(document));
    report("scroll-reveal", reveal::init(document, config));
    report("service-selector", services::init(document, config));
}

/// Deliver `submission`, logging a failure. Returns whether it was accepted.
fn deliver(submitter: &dyn Submitter, submission: &Submission) -> bool {
    match submitter.submit(submission) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(kind = submission.kind(), error = %err, "submission failed");
            false
        }
    }
}

/// Alert shown when a submitter refuses a form.
const RETRY_MESSAGE: &str = "Something went wrong. Please try again.";
