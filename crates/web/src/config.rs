//! Loading the embedded site configuration.

use mb_studio_core::config::SiteConfig;
use web_sys::Document;

use crate::error::Result;

/// Id of the `<script type="application/json">` block holding the config.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Read the page's config block. Pages without one get the defaults.
///
/// # Errors
///
/// Returns [`crate::error::WidgetError::Config`] if the block is present
/// but invalid.
pub fn load(document: &Document) -> Result<SiteConfig> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(SiteConfig::default());
    };
    let json = element.text_content().unwrap_or_default();
    if json.trim().is_empty() {
        return Ok(SiteConfig::default());
    }
    Ok(SiteConfig::from_json(&json)?)
}
