//! Navigation bar behaviour: mobile menu, scrolled styling, in-page links.

/// Scroll offset past which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 100.0;

/// Height kept clear above an in-page link target (the fixed navbar).
pub const DEFAULT_ANCHOR_OFFSET: f64 = 80.0;

/// Mobile menu open/closed state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Flip the menu, returning whether it is now open.
    pub const fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu (after a link is followed).
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Whether the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }
}

/// Whether the navbar should carry its scrolled style.
#[must_use]
pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Selector for an in-page link, or `None` for links the browser should
/// follow normally (other pages, and the bare `#`).
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

/// Window scroll position that brings a target at `offset_top` just
/// under the navbar.
#[must_use]
pub fn scroll_destination(offset_top: f64, anchor_offset: f64) -> f64 {
    offset_top - anchor_offset
}
