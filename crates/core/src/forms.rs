//! Contact and newsletter form checks.

use thiserror::Error;

use crate::types::{Blank, Email, EmailError, FieldSnapshot, missing_required};

/// Alert shown after a contact message is accepted.
pub const CONTACT_THANKS: &str =
    "Thank you for your message! We will get back to you within 24 hours.";

/// Alert shown after a newsletter sign-up is accepted.
pub const NEWSLETTER_THANKS: &str =
    "Thank you for subscribing! Check your email for a confirmation.";

/// Why a form was refused. `Display` is the alert text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Required fields are blank after trimming.
    #[error("Please fill in all required fields.")]
    MissingRequired {
        /// Indices of the blank fields.
        fields: Vec<usize>,
    },
    /// The newsletter address does not parse.
    #[error("Please enter a valid email address.")]
    InvalidEmail(#[source] EmailError),
}

/// Per-field error marks for a contact form: `true` means the field gets
/// the `error` class, `false` means any existing mark is cleared.
#[must_use]
pub fn contact_marks(fields: &[FieldSnapshot]) -> Vec<bool> {
    let missing = missing_required(fields, Blank::Trimmed);
    (0..fields.len()).map(|i| missing.contains(&i)).collect()
}

/// Check a contact form. Whitespace-only values count as blank.
///
/// # Errors
///
/// Returns [`FormError::MissingRequired`] naming the blank fields.
pub fn validate_contact(fields: &[FieldSnapshot]) -> Result<(), FormError> {
    let missing = missing_required(fields, Blank::Trimmed);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FormError::MissingRequired { fields: missing })
    }
}

/// Check a newsletter sign-up, trimming the raw input first.
///
/// # Errors
///
/// Returns [`FormError::InvalidEmail`] if the trimmed input is not an
/// address.
pub fn validate_newsletter(raw: &str) -> Result<Email, FormError> {
    Email::parse(raw.trim()).map_err(FormError::InvalidEmail)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_trims_values() {
        let fields = [
            FieldSnapshot::required("name", "Maya"),
            FieldSnapshot::required("message", "   "),
            FieldSnapshot::optional("phone", ""),
        ];
        assert_eq!(
            validate_contact(&fields),
            Err(FormError::MissingRequired { fields: vec![1] })
        );
        assert_eq!(contact_marks(&fields), vec![false, true, false]);
    }

    #[test]
    fn test_contact_ok() {
        let fields = [
            FieldSnapshot::required("name", "Maya"),
            FieldSnapshot::required("email", "maya@example.com"),
        ];
        assert!(validate_contact(&fields).is_ok());
        assert_eq!(contact_marks(&fields), vec![false, false]);
    }

    #[test]
    fn test_contact_message_text() {
        let err = validate_contact(&[FieldSnapshot::required("name", "")]).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all required fields.");
    }

    #[test]
    fn test_newsletter_trims_and_parses() {
        let email = validate_newsletter("  client@example.com ").unwrap();
        assert_eq!(email.as_str(), "client@example.com");
    }

    #[test]
    fn test_newsletter_rejects() {
        for raw in ["", "   ", "client@example", "client example.com"] {
            let err = validate_newsletter(raw).unwrap_err();
            assert_eq!(err.to_string(), "Please enter a valid email address.");
        }
    }
}
