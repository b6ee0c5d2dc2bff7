//! Integration tests for MB Studio Fix.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p mb-studio-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shop_session` - Cart driven the way the shop page drives it
//! - `booking_flow` - Booking form from deep link to submission
//! - `site_server` - Static host router
//!
//! This library holds the shared fixtures.

use std::cell::RefCell;
use std::path::PathBuf;

use mb_studio_core::FieldSnapshot;
use mb_studio_core::submission::{SubmitError, Submission, Submitter};
use mb_studio_server::config::ServerConfig;

/// Submitter that keeps every submission, optionally refusing them.
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    received: RefCell<Vec<Submission>>,
    refuse: bool,
}

impl RecordingSubmitter {
    /// Accepts everything.
    #[must_use]
    pub fn accepting() -> Self {
        Self::default()
    }

    /// Refuses everything, still recording what it was given.
    #[must_use]
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    /// Submissions seen so far.
    #[must_use]
    pub fn received(&self) -> Vec<Submission> {
        self.received.borrow().clone()
    }
}

impl Submitter for RecordingSubmitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        self.received.borrow_mut().push(submission.clone());
        if self.refuse {
            Err(SubmitError::Rejected("service unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Snapshots for one booking step: `(name, value, required)`.
#[must_use]
pub fn step(fields: &[(&str, &str, bool)]) -> Vec<FieldSnapshot> {
    fields
        .iter()
        .map(|&(name, value, required)| FieldSnapshot {
            name: name.to_string(),
            value: value.to_string(),
            required,
        })
        .collect()
}

/// Server configuration pointing at the server crate's test fixtures.
#[must_use]
pub fn fixture_server_config() -> ServerConfig {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../server/tests/fixtures");
    ServerConfig {
        host: std::net::Ipv4Addr::LOCALHOST.into(),
        port: 0,
        site_root: root.join("site"),
        pkg_dir: root.join("pkg"),
    }
}
