//! Snapshot of a form control, as read from the page.

use serde::{Deserialize, Serialize};

/// The parts of a form control that validation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSnapshot {
    /// Control name, used when the form is handed to a submitter.
    pub name: String,
    /// Current value.
    pub value: String,
    /// Whether the control carries the `required` attribute.
    pub required: bool,
}

impl FieldSnapshot {
    /// A required control.
    #[must_use]
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: true,
        }
    }

    /// An optional control.
    #[must_use]
    pub fn optional(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            required: false,
        }
    }
}

/// How a control contributes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// `<input type="checkbox">`: its value counts only while checked.
    Checkbox,
    /// `<input type="radio">`: the group's checked member supplies the value.
    Radio,
    /// Any other input, select or textarea.
    Text,
}

impl ControlKind {
    /// Kind of an `<input>` with the given `type` attribute.
    #[must_use]
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("checkbox") {
            Self::Checkbox
        } else if input_type.eq_ignore_ascii_case("radio") {
            Self::Radio
        } else {
            Self::Text
        }
    }
}

/// A form control as read off the page, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    /// `name` attribute, falling back to `id`.
    pub name: String,
    /// How the value is read.
    pub kind: ControlKind,
    /// Raw `value`.
    pub value: String,
    /// Checked state; ignored for [`ControlKind::Text`].
    pub checked: bool,
    /// Whether the control carries the `required` attribute.
    pub required: bool,
}

impl Control {
    /// Whether a browser would include this control when submitting.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        match self.kind {
            ControlKind::Checkbox | ControlKind::Radio => self.checked,
            ControlKind::Text => true,
        }
    }

    /// Snapshot for validation.
    ///
    /// An unchecked checkbox reads as empty. A radio reads as the value of
    /// the checked radio sharing its name in `group`, or empty when none is.
    #[must_use]
    pub fn snapshot(&self, group: &[Self]) -> FieldSnapshot {
        let value = match self.kind {
            ControlKind::Checkbox if !self.checked => String::new(),
            ControlKind::Radio => group
                .iter()
                .find(|other| {
                    other.kind == ControlKind::Radio && other.checked && other.name == self.name
                })
                .map(|checked| checked.value.clone())
                .unwrap_or_default(),
            _ => self.value.clone(),
        };
        FieldSnapshot {
            name: self.name.clone(),
            value,
            required: self.required,
        }
    }
}

/// Name/value pairs a browser would submit for `controls`, in order.
#[must_use]
pub fn form_entries(controls: &[Control]) -> Vec<FieldSnapshot> {
    controls
        .iter()
        .filter(|control| control.is_submitted())
        .map(|control| FieldSnapshot {
            name: control.name.clone(),
            value: control.value.clone(),
            required: control.required,
        })
        .collect()
}

/// How an empty value is recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blank {
    /// Only the empty string is blank.
    Exact,
    /// Whitespace-only values are blank too.
    Trimmed,
}

impl Blank {
    fn is_blank(self, value: &str) -> bool {
        match self {
            Self::Exact => value.is_empty(),
            Self::Trimmed => value.trim().is_empty(),
        }
    }
}

/// Indices of required fields whose value is blank under `rule`.
#[must_use]
pub fn missing_required(fields: &[FieldSnapshot], rule: Blank) -> Vec<usize> {
    fields
        .iter()
        .enumerate()
        .filter(|(_, field)| field.required && rule.is_blank(&field.value))
        .map(|(i, _)| i)
        .collect()
}
