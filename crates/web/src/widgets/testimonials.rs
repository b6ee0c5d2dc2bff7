//! Testimonial slider.

use std::cell::RefCell;
use std::rc::Rc;

use mb_studio_core::config::SiteConfig;
use mb_studio_core::rotator::{Rotator, TimerCommand};
use web_sys::{Document, Element, Event};

use crate::dom::{self, Scope, set_class};
use crate::error::{Result, WidgetError};
use crate::timer::Interval;

/// Slider state. It is owned by the dot click handlers and by the running
/// interval's callback; replacing `timer` releases the old callback's share.
struct Slider {
    rotator: Rotator,
    cards: Vec<Element>,
    dots: Vec<Element>,
    timer: Option<Interval>,
}

impl Slider {
    fn show(&self, index: usize) {
        for (i, card) in self.cards.iter().enumerate() {
            set_class(card, "active", i == index);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            set_class(dot, "active", i == index);
        }
    }
}

/// Start the slider.
///
/// # Errors
///
/// Returns [`WidgetError::Missing`] when there are no testimonial cards.
pub fn init(document: &Document, config: &SiteConfig) -> Result<()> {
    let cards = document.require_all(".testimonial-card")?;
    let dots = document.find_all(".testimonial-dots .dot");
    let rotator = Rotator::new(cards.len(), config.testimonial_interval())
        .ok_or(WidgetError::Missing(".testimonial-card"))?;

    let slider = Rc::new(RefCell::new(Slider {
        rotator,
        cards,
        dots: dots.clone(),
        timer: None,
    }));

    for (index, dot) in dots.iter().enumerate() {
        let slider = Rc::clone(&slider);
        dom::on(dot, "click", move |_: Event| select(&slider, index))?;
    }

    let command = slider.borrow_mut().rotator.start();
    apply(&slider, command)
}

fn select(slider: &Rc<RefCell<Slider>>, index: usize) {
    let selected = slider.borrow_mut().rotator.select(index);
    let Some((shown, command)) = selected else {
        return;
    };
    slider.borrow().show(shown);
    if let Err(err) = apply(slider, command) {
        tracing::warn!(error = %err, "could not restart testimonial timer");
    }
}

fn apply(slider: &Rc<RefCell<Slider>>, command: TimerCommand) -> Result<()> {
    // Drop the old interval before installing a new one.
    let previous = slider.borrow_mut().timer.take();
    drop(previous);

    let TimerCommand::Start { every, generation } = command else {
        return Ok(());
    };

    let owner = Rc::clone(slider);
    let interval = Interval::start(every, move || {
        let advanced = owner.borrow_mut().rotator.tick(generation);
        if let Some(index) = advanced {
            owner.borrow().show(index);
        }
    })?;
    slider.borrow_mut().timer = Some(interval);
    Ok(())
}
