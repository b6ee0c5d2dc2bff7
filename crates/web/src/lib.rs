//! MB Studio Web - Browser bindings for the site widgets.
//!
//! Compiled to WebAssembly and loaded by every page. On start the module
//! reads the optional site config, installs console logging, and once the
//! DOM is parsed wires each widget it finds markup for:
//!
//! - navigation menu, scrolled navbar and smooth in-page scrolling
//! - testimonial rotator
//! - FAQ accordion
//! - gallery and shop filters
//! - multi-step booking form and its service picker
//! - contact and newsletter forms
//! - cart panel
//! - gallery lightbox
//! - scroll-reveal animations
//!
//! All decisions are made by `mb-studio-core`; this crate only reads the
//! page into core types and writes the results back.

// wasm-bindgen's export shim for `start` contains unsafe glue.
#![allow(unsafe_code)]

pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod timer;
pub mod widgets;

use std::rc::Rc;

use mb_studio_core::config::SiteConfig;
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point.
#[wasm_bindgen(start)]
pub fn start() {
    let Ok(document) = dom::document() else {
        return;
    };

    let loaded = config::load(&document);
    let config = loaded.as_ref().map_or_else(|_| SiteConfig::default(), Clone::clone);
    logging::init(&config.log_filter);
    if let Err(err) = &loaded {
        tracing::warn!(error = %err, "using default site config");
    }

    let config = Rc::new(config);
    if document.ready_state() == "loading" {
        let target = document.clone();
        let wired = dom::once(&document, "DOMContentLoaded", move |_| {
            widgets::init_all(&target, &config);
        });
        if let Err(err) = wired {
            tracing::error!(error = %err, "could not wait for DOMContentLoaded");
        }
    } else {
        widgets::init_all(&document, &config);
    }
}
