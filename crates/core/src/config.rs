//! Site configuration read by the browser layer.
//!
//! Pages may embed a JSON block to tune the widgets:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "logFilter": "debug", "testimonialIntervalMs": 7000 }
//! </script>
//! ```
//!
//! Every field is optional; absent fields take the defaults below.
//!
//! | Key | Default |
//! |-----|---------|
//! | `logFilter` | `info` |
//! | `testimonialIntervalMs` | 5000 |
//! | `scrollThresholdPx` | 100 |
//! | `anchorOffsetPx` | 80 |
//! | `deepLinkDelayMs` | 100 |
//! | `cartFeedbackMs` | 1500 |
//! | `gallery.showDelayMs` / `gallery.hideDelayMs` | 50 / 300 |
//! | `reveal.threshold` / `reveal.rootMargin` | 0.1 / `0px 0px -50px 0px` |

use core::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::DEEP_LINK_DELAY;
use crate::nav::{DEFAULT_ANCHOR_OFFSET, DEFAULT_SCROLL_THRESHOLD};
use crate::rotator::DEFAULT_INTERVAL;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid site config value {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Widget tunables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// `tracing` filter directives for the browser console.
    pub log_filter: String,
    /// Testimonial auto-advance period.
    pub testimonial_interval_ms: u32,
    /// Scroll offset that switches the navbar to its scrolled style.
    pub scroll_threshold_px: f64,
    /// Space left above in-page link targets.
    pub anchor_offset_px: f64,
    /// Delay before a `?course=` deep link selects its option.
    pub deep_link_delay_ms: u32,
    /// How long an add-to-cart button shows its confirmation.
    pub cart_feedback_ms: u32,
    /// Gallery filter fade timings.
    pub gallery: GalleryTiming,
    /// Scroll-reveal observer options.
    pub reveal: RevealOptions,
}

/// Gallery filter fade timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GalleryTiming {
    /// Delay between `display:block` and the fade-in styles.
    pub show_delay_ms: u32,
    /// Delay between the fade-out styles and `display:none`.
    pub hide_delay_ms: u32,
}

/// `IntersectionObserver` options for scroll reveal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// CSS margin applied to the viewport.
    pub root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            testimonial_interval_ms: duration_ms(DEFAULT_INTERVAL),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD,
            anchor_offset_px: DEFAULT_ANCHOR_OFFSET,
            deep_link_delay_ms: duration_ms(DEEP_LINK_DELAY),
            cart_feedback_ms: 1500,
            gallery: GalleryTiming::default(),
            reveal: RevealOptions::default(),
        }
    }
}

impl Default for GalleryTiming {
    fn default() -> Self {
        Self {
            show_delay_ms: 50,
            hide_delay_ms: 300,
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate an embedded config block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed, has unknown keys, or
    /// holds an out-of-range value.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the widgets cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a zero testimonial
    /// interval, a reveal threshold outside `0..=1`, or a negative pixel
    /// value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.testimonial_interval_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "testimonialIntervalMs",
                "must be greater than zero".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::InvalidValue(
                "reveal.threshold",
                format!("must be between 0 and 1 (got {})", self.reveal.threshold),
            ));
        }
        for (name, value) in [
            ("scrollThresholdPx", self.scroll_threshold_px),
            ("anchorOffsetPx", self.anchor_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue(
                    name,
                    format!("must be a non-negative number (got {value})"),
                ));
            }
        }
        Ok(())
    }

    /// Testimonial auto-advance period.
    #[must_use]
    pub fn testimonial_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.testimonial_interval_ms))
    }

    /// Deep-link selection delay.
    #[must_use]
    pub fn deep_link_delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.deep_link_delay_ms))
    }

    /// Add-to-cart confirmation duration.
    #[must_use]
    pub fn cart_feedback(&self) -> Duration {
        Duration::from_millis(u64::from(self.cart_feedback_ms))
    }
}

fn duration_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
