//! Multi-step booking form.
//!
//! Steps form a straight chain `0..step_count`. `next` and `submit` are
//! gated on the current step's required fields being non-empty; `previous`
//! never is. A successful `submit` ends the machine.

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::{Blank, FieldSnapshot, missing_required};

/// Alert text for a step with empty required fields.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Why a booking transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// Required fields on the current step are empty.
    #[error("Please fill in all required fields.")]
    MissingRequired {
        /// Current step index.
        step: usize,
        /// Indices (into the snapshot slice) of the empty fields.
        fields: Vec<usize>,
    },
    /// `next` was called on the final step.
    #[error("already on the final step")]
    NoNextStep,
    /// `submit` was called before reaching the final step.
    #[error("booking can only be submitted from the final step")]
    NotFinalStep,
    /// The booking was already submitted.
    #[error("booking already submitted")]
    AlreadySubmitted,
}

/// Position in the booking chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingStepper {
    current: usize,
    step_count: usize,
    submitted: bool,
}

impl BookingStepper {
    /// Stepper on step 0. Returns `None` for a form with no steps.
    #[must_use]
    pub const fn new(step_count: usize) -> Option<Self> {
        if step_count == 0 {
            return None;
        }
        Some(Self {
            current: 0,
            step_count,
            submitted: false,
        })
    }

    /// Current step index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Number of steps.
    #[must_use]
    pub const fn step_count(&self) -> usize {
        self.step_count
    }

    /// Whether the current step is the last one.
    #[must_use]
    pub const fn is_final_step(&self) -> bool {
        self.current + 1 == self.step_count
    }

    /// Whether the booking has been submitted.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Check the current step's fields without moving.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::MissingRequired`] listing empty required fields.
    pub fn validate(&self, fields: &[FieldSnapshot]) -> Result<(), StepError> {
        let missing = missing_required(fields, Blank::Exact);
        if missing.is_empty() {
            Ok(())
        } else {
            tracing::debug!(step = self.current, missing = missing.len(), "booking step incomplete");
            Err(StepError::MissingRequired {
                step: self.current,
                fields: missing,
            })
        }
    }

    /// Advance one step if the current step's `fields` are complete.
    ///
    /// # Errors
    ///
    /// Fails without moving if already submitted, on the final step, or
    /// if a required field is empty.
    pub fn next(&mut self, fields: &[FieldSnapshot]) -> Result<usize, StepError> {
        self.ensure_open()?;
        if self.is_final_step() {
            return Err(StepError::NoNextStep);
        }
        self.validate(fields)?;
        self.current += 1;
        Ok(self.current)
    }

    /// Go back one step. Step 0 stays at 0.
    ///
    /// # Errors
    ///
    /// Fails if the booking was already submitted.
    pub fn previous(&mut self) -> Result<usize, StepError> {
        if self.submitted {
            return Err(StepError::AlreadySubmitted);
        }
        self.current = self.current.saturating_sub(1);
        Ok(self.current)
    }

    /// Finish the booking from the final step.
    ///
    /// # Errors
    ///
    /// Fails if already submitted, not on the final step, or a required
    /// field on the final step is empty.
    pub fn submit(&mut self, fields: &[FieldSnapshot]) -> Result<(), StepError> {
        self.check_submit(fields)?;
        self.submitted = true;
        tracing::info!(steps = self.step_count, "booking submitted");
        Ok(())
    }

    /// Run every check `submit` would, without submitting. Lets a caller
    /// hand the booking off first and only then commit.
    ///
    /// # Errors
    ///
    /// Same as [`BookingStepper::submit`].
    pub fn check_submit(&self, fields: &[FieldSnapshot]) -> Result<(), StepError> {
        self.ensure_open()?;
        if !self.is_final_step() {
            return Err(StepError::NotFinalStep);
        }
        self.validate(fields)
    }

    fn ensure_open(&self) -> Result<(), StepError> {
        if self.submitted {
            Err(StepError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }
}

/// Value for the `min` attribute of the form's date inputs.
#[must_use]
pub fn min_booking_date(today: NaiveDate) -> String {
    today.format("%Y-%m-%d").to_string()
}
