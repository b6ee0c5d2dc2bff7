//! Gallery lightbox.

use std::cell::RefCell;
use std::rc::Rc;

use mb_studio_core::lightbox::{KeyOutcome, Lightbox};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlImageElement, KeyboardEvent};

use crate::dom::{self, Scope, lock_scroll, set_class};
use crate::error::{Result, WidgetError};

/// Image shown for one `.view-btn`.
struct Slide {
    src: String,
    alt: String,
}

struct Viewer {
    document: Document,
    root: Element,
    image: Option<HtmlImageElement>,
    slides: Vec<Option<Slide>>,
    state: Lightbox,
}

impl Viewer {
    fn show(&self, index: usize) {
        let (Some(image), Some(Some(slide))) = (&self.image, self.slides.get(index)) else {
            return;
        };
        image.set_src(&slide.src);
        image.set_alt(&slide.alt);
    }

    fn open(&mut self, index: usize) {
        if let Some(index) = self.state.open_at(index) {
            self.show(index);
            set_class(&self.root, "active", true);
            lock_scroll(&self.document, true);
        }
    }

    fn close(&mut self) {
        self.state.close();
        set_class(&self.root, "active", false);
        lock_scroll(&self.document, false);
    }
}

/// The picture inside the `.gallery-item` holding a view button.
fn slide_for(button: &Element) -> Option<Slide> {
    let item = button.closest(".gallery-item").ok().flatten()?;
    let image = item.find("img")?.dyn_into::<HtmlImageElement>().ok()?;
    Some(Slide {
        src: image.src(),
        alt: image.alt(),
    })
}

/// Wire `#lightbox` to the gallery's view buttons.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when there is no lightbox or no view
/// button.
pub fn init(document: &Document) -> Result<()> {
    let root = dom::by_id(document, "lightbox", "#lightbox")?;
    let buttons = document.require_all(".view-btn")?;
    let state = Lightbox::new(buttons.len()).ok_or(WidgetError::Missing(".view-btn"))?;

    let viewer = Rc::new(RefCell::new(Viewer {
        document: document.clone(),
        image: root
            .find("img")
            .and_then(|image| image.dyn_into::<HtmlImageElement>().ok()),
        slides: buttons.iter().map(slide_for).collect(),
        root: root.clone(),
        state,
    }));

    for (index, button) in buttons.iter().enumerate() {
        let viewer = Rc::clone(&viewer);
        dom::on(button, "click", move |_: Event| viewer.borrow_mut().open(index))?;
    }

    if let Some(close) = document.find(".lightbox-close") {
        let viewer = Rc::clone(&viewer);
        dom::on(&close, "click", move |_: Event| viewer.borrow_mut().close())?;
    }

    {
        let viewer = Rc::clone(&viewer);
        let backdrop: EventTarget = root.clone().into();
        dom::on(&root, "click", move |event: Event| {
            if event.target().as_ref() == Some(&backdrop) {
                viewer.borrow_mut().close();
            }
        })?;
    }

    if let Some(prev) = document.find(".lightbox-prev") {
        let viewer = Rc::clone(&viewer);
        dom::on(&prev, "click", move |_: Event| {
            let mut viewer = viewer.borrow_mut();
            let index = viewer.state.prev();
            viewer.show(index);
        })?;
    }

    if let Some(next) = document.find(".lightbox-next") {
        let viewer = Rc::clone(&viewer);
        dom::on(&next, "click", move |_: Event| {
            let mut viewer = viewer.borrow_mut();
            let index = viewer.state.next();
            viewer.show(index);
        })?;
    }

    dom::on(document, "keydown", move |event: KeyboardEvent| {
        let mut viewer = viewer.borrow_mut();
        match viewer.state.handle_key(&event.key()) {
            KeyOutcome::Ignored => {}
            KeyOutcome::Closed => viewer.close(),
            KeyOutcome::Showed(index) => viewer.show(index),
        }
    })
}
