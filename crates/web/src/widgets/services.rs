//! Service picker on the booking page: category radios drive the
//! `#specificService` select, and `?course=` pre-selects a course.

use mb_studio_core::catalog::{DeepLink, select_options};
use mb_studio_core::config::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, HtmlOptionElement, HtmlSelectElement};

use crate::dom::{self, Scope};
use crate::error::{Result, WidgetError};
use crate::timer;

const CATEGORY_RADIOS: &str = r#"input[name="serviceCategory"]"#;

/// Replace the select's options with those for category `key`.
///
/// # Errors
///
/// Returns [`WidgetError::Js`] if an option cannot be created or added.
pub fn populate(select: &HtmlSelectElement, key: &str) -> Result<()> {
    select.set_length(0);
    for service in select_options(key) {
        let option = HtmlOptionElement::new_with_text_and_value(service.label, service.value)?;
        select.add_with_html_option_element(&option)?;
    }
    Ok(())
}

/// Wire the category radios and apply any deep link.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when the page has no
/// `#specificService` select.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let select = dom::by_id(document, "specificService", "#specificService")?
        .dyn_into::<HtmlSelectElement>()
        .map_err(|_| WidgetError::Missing("#specificService"))?;

    for radio in document.find_all(CATEGORY_RADIOS) {
        let Ok(radio) = radio.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let select = select.clone();
        let source = radio.clone();
        dom::on(&radio, "change", move |_: Event| {
            let key = source.value();
            if let Err(err) = populate(&select, &key) {
                tracing::warn!(category = %key, error = %err, "could not fill service list");
            }
        })?;
    }

    let search = dom::window()?.location().search()?;
    let Some(link) = DeepLink::from_query(&search) else {
        return Ok(());
    };
    apply_deep_link(document, &select, &link, config)
}

fn apply_deep_link(
    document: &Document,
    select: &HtmlSelectElement,
    link: &DeepLink,
    config: &SiteConfig,
) -> Result<()> {
    let key = link.category().key();
    let Some(radio) = document
        .find(&format!(r#"{CATEGORY_RADIOS}[value="{key}"]"#))
        .and_then(|radio| radio.dyn_into::<HtmlInputElement>().ok())
    else {
        tracing::debug!(course = link.course(), "no course radio for deep link");
        return Ok(());
    };

    radio.set_checked(true);
    radio.dispatch_event(&Event::new("change")?)?;

    let Some(option) = link.resolve() else {
        tracing::debug!(course = link.course(), "deep link names no known course");
        return Ok(());
    };
    let select = select.clone();
    timer::after(config.deep_link_delay(), move || select.set_value(option.value))
}
