//! Thin helpers over `web-sys` used by every widget.

use mb_studio_core::{Control, ControlKind, FieldSnapshot};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, NodeList, Window,
};

use crate::error::{Result, WidgetError};

/// The global `window`.
///
/// # Errors
///
/// Returns [`WidgetError::NoWindow`] outside a browser.
pub fn window() -> Result<Window> {
    web_sys::window().ok_or(WidgetError::NoWindow)
}

/// The current `document`.
///
/// # Errors
///
/// Returns [`WidgetError::NoWindow`] outside a browser.
pub fn document() -> Result<Document> {
    window()?.document().ok_or(WidgetError::NoWindow)
}

/// Selector queries against a document or an element.
///
/// Invalid selectors behave like selectors that match nothing.
pub trait Scope {
    /// First match.
    fn find(&self, selector: &str) -> Option<Element>;
    /// All matches, in document order.
    fn find_all(&self, selector: &str) -> Vec<Element>;

    /// First match, or [`WidgetError::Missing`].
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Missing`] if nothing matches.
    fn require(&self, selector: &'static str) -> Result<Element> {
        self.find(selector).ok_or(WidgetError::Missing(selector))
    }

    /// All matches, or [`WidgetError::Missing`] when there are none.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::Missing`] if nothing matches.
    fn require_all(&self, selector: &'static str) -> Result<Vec<Element>> {
        let found = self.find_all(selector);
        if found.is_empty() {
            Err(WidgetError::Missing(selector))
        } else {
            Ok(found)
        }
    }
}

impl Scope for Document {
    fn find(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn find_all(&self, selector: &str) -> Vec<Element> {
        elements(self.query_selector_all(selector).ok())
    }
}

impl Scope for Element {
    fn find(&self, selector: &str) -> Option<Element> {
        self.query_selector(selector).ok().flatten()
    }

    fn find_all(&self, selector: &str) -> Vec<Element> {
        elements(self.query_selector_all(selector).ok())
    }
}

fn elements(list: Option<NodeList>) -> Vec<Element> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element by id, or [`WidgetError::Missing`] naming `label`.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] if there is no such element.
pub fn by_id(document: &Document, id: &str, label: &'static str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or(WidgetError::Missing(label))
}

/// Attach `handler` for the page's lifetime. Events that are not an `E`
/// are dropped.
///
/// # Errors
///
/// Returns [`WidgetError::Js`] if the listener cannot be added.
pub fn on<E>(target: &EventTarget, event: &str, mut handler: impl FnMut(E) + 'static) -> Result<()>
where
    E: JsCast + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    });
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Attach `handler` for a single delivery of `event`.
///
/// # Errors
///
/// Returns [`WidgetError::Js`] if the listener cannot be added.
pub fn once(target: &EventTarget, event: &str, handler: impl FnOnce(Event) + 'static) -> Result<()> {
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(err) = result {
        tracing::warn!(class, error = ?err, "class update failed");
    }
}

/// Whether `element` carries `class`.
#[must_use]
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Set an inline style property. Non-HTML elements are left alone.
pub fn set_style(element: &Element, property: &str, value: &str) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(err) = element.style().set_property(property, value) {
        tracing::warn!(property, error = ?err, "style update failed");
    }
}

/// Lock or release page scrolling behind an overlay.
pub fn lock_scroll(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}

/// Blocking alert dialog.
pub fn alert(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(WidgetError::from));
    if let Err(err) = shown {
        tracing::warn!(error = %err, "alert failed");
    }
}

/// Trimmed text content.
#[must_use]
pub fn text(element: &Element) -> String {
    element
        .text_content()
        .map(|t| t.trim().to_owned())
        .unwrap_or_default()
}

/// Value of an input, select or textarea.
#[must_use]
pub fn control_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    element
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Read a control's raw state. Elements that are not an input, select or
/// textarea give `None`.
#[must_use]
pub fn read_control(element: &Element) -> Option<Control> {
    let value = control_value(element)?;
    let (kind, checked) = element
        .dyn_ref::<HtmlInputElement>()
        .map_or((ControlKind::Text, false), |input| {
            (ControlKind::from_input_type(&input.type_()), input.checked())
        });
    Some(Control {
        name: element
            .get_attribute("name")
            .or_else(|| element.get_attribute("id"))
            .unwrap_or_default(),
        kind,
        value,
        checked,
        required: element.has_attribute("required"),
    })
}

/// Snapshot `element` for validation. A radio is resolved against the
/// other radios in `scope`.
#[must_use]
pub fn snapshot(scope: &Element, element: &Element) -> FieldSnapshot {
    let Some(control) = read_control(element) else {
        return FieldSnapshot {
            name: element.get_attribute("name").unwrap_or_default(),
            value: String::new(),
            required: element.has_attribute("required"),
        };
    };
    let group: Vec<Control> = if control.kind == ControlKind::Radio {
        scope
            .find_all(r#"input[type="radio"]"#)
            .iter()
            .filter_map(read_control)
            .collect()
    } else {
        Vec::new()
    };
    control.snapshot(&group)
}

/// Snapshot every named control in `form` that a browser would submit.
#[must_use]
pub fn form_entries(form: &Element) -> Vec<FieldSnapshot> {
    let controls: Vec<Control> = form
        .find_all("input[name], select[name], textarea[name]")
        .iter()
        .filter_map(read_control)
        .collect();
    mb_studio_core::form_entries(&controls)
}
