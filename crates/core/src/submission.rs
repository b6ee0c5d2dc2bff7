//! Hand-off point for completed forms.
//!
//! Booking requests, contact messages and newsletter sign-ups all end in a
//! [`Submission`] passed to a [`Submitter`]. The site ships with
//! [`LogSubmitter`], which records the submission and reports success;
//! wiring a booking backend or mailing-list service means providing
//! another implementation.

use serde::Serialize;
use thiserror::Error;

use crate::types::{Email, FieldSnapshot};

/// A submitter could not deliver a submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The receiving service refused or could not be reached.
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The submission could not be encoded.
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A named form value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormEntry {
    pub name: String,
    pub value: String,
}

impl From<&FieldSnapshot> for FormEntry {
    fn from(field: &FieldSnapshot) -> Self {
        Self {
            name: field.name.clone(),
            value: field.value.clone(),
        }
    }
}

/// A completed form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    /// The booking form's fields across all steps.
    Booking { entries: Vec<FormEntry> },
    /// The contact form's fields.
    Contact { entries: Vec<FormEntry> },
    /// A newsletter sign-up.
    Newsletter { email: Email },
}

impl Submission {
    /// Booking submission from field snapshots. Unnamed fields are skipped.
    #[must_use]
    pub fn booking(fields: &[FieldSnapshot]) -> Self {
        Self::Booking {
            entries: named_entries(fields),
        }
    }

    /// Contact submission from field snapshots. Unnamed fields are skipped.
    #[must_use]
    pub fn contact(fields: &[FieldSnapshot]) -> Self {
        Self::Contact {
            entries: named_entries(fields),
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Booking { .. } => "booking",
            Self::Contact { .. } => "contact",
            Self::Newsletter { .. } => "newsletter",
        }
    }
}

fn named_entries(fields: &[FieldSnapshot]) -> Vec<FormEntry> {
    fields
        .iter()
        .filter(|field| !field.name.is_empty())
        .map(FormEntry::from)
        .collect()
}

/// Receives completed forms.
pub trait Submitter {
    /// Deliver `submission`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] if the submission could not be delivered.
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Logs each submission as JSON and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl Submitter for LogSubmitter {
    fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(kind = submission.kind(), %payload, "submission accepted");
        Ok(())
    }
}
