//! MB Studio Core - Widget state and value types.
//!
//! This crate holds everything the site's interactive widgets decide:
//! - `cart` - In-memory cart with merge-on-add and totals
//! - `booking` - Multi-step booking form state machine
//! - `catalog` - Static service table and the `course` deep link
//! - `cycle`, `rotator`, `lightbox` - Wrapping index viewers
//! - `accordion`, `filter` - Single-open FAQ and category visibility
//! - `forms`, `submission` - Contact/newsletter checks and the submit seam
//! - `nav`, `reveal` - Navigation math and one-shot scroll reveal
//! - `config` - Tunables read by the browser layer
//!
//! # Architecture
//!
//! The core crate contains no DOM access and no I/O. The `mb-studio-web`
//! crate snapshots the page into the plain types here, asks the core what
//! to do, and applies the answer back to the page.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod accordion;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod cycle;
pub mod filter;
pub mod forms;
pub mod lightbox;
pub mod nav;
pub mod reveal;
pub mod rotator;
pub mod submission;
pub mod types;

pub use types::*;
