//! Widget error type.
//!
//! Every widget initialiser returns `Result<(), WidgetError>`. The start-up
//! sequence logs failures and moves on to the next widget, so a page that
//! lacks (or breaks) one widget's markup still gets all the others.

use mb_studio_core::config::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while wiring a widget to the page.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The page has no element for this selector.
    #[error("Missing element: {0}")]
    Missing(&'static str),

    /// No global `window` (not running in a browser).
    #[error("No window available")]
    NoWindow,

    /// A DOM call threw.
    #[error("JavaScript error: {0}")]
    Js(String),

    /// The embedded site config was rejected.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

impl WidgetError {
    /// Whether the error only means "this page does not have the widget".
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// Result type alias for `WidgetError`.
pub type Result<T> = std::result::Result<T, WidgetError>;

/// Log the outcome of a widget initialiser.
pub fn report(widget: &str, result: Result<()>) {
    match result {
        Ok(()) => tracing::debug!(widget, "widget ready"),
        Err(err) if err.is_absent() => tracing::debug!(widget, error = %err, "widget not on page"),
        Err(err) => tracing::warn!(widget, error = %err, "widget failed to start"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_markup_counts_as_absent() {
        assert!(WidgetError::Missing(".navbar").is_absent());
        assert!(!WidgetError::NoWindow.is_absent());
        assert!(!WidgetError::Js("TypeError".to_string()).is_absent());
    }

    #[test]
    fn test_display_names_the_selector() {
        assert_eq!(
            WidgetError::Missing("#bookingForm").to_string(),
            "Missing element: #bookingForm"
        );
    }
}
