//! Gallery lightbox: an open/closed viewer over a fixed image list.

use crate::cycle::Cycle;

/// Result of a key press while the lightbox is on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key is not handled, or the lightbox is closed.
    Ignored,
    /// Escape closed the viewer.
    Closed,
    /// An arrow key moved to this image.
    Showed(usize),
}

/// Viewer state: which image, and whether it is showing.
#[derive(Debug, Clone)]
pub struct Lightbox {
    cycle: Cycle,
    open: bool,
}

impl Lightbox {
    /// Closed viewer over `len` images. `None` when there are no images.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        Some(Self {
            cycle: Cycle::new(len)?,
            open: false,
        })
    }

    /// Whether the viewer is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current image index.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.cycle.index()
    }

    /// Open on image `index`. Out-of-range indices leave the viewer as is.
    pub fn open_at(&mut self, index: usize) -> Option<usize> {
        let index = self.cycle.select(index)?;
        self.open = true;
        tracing::debug!(index, "lightbox opened");
        Some(index)
    }

    /// Hide the viewer, keeping the current index.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Move to the next image, wrapping.
    pub const fn next(&mut self) -> usize {
        self.cycle.next()
    }

    /// Move to the previous image, wrapping.
    pub const fn prev(&mut self) -> usize {
        self.cycle.prev()
    }

    /// Keyboard navigation, using `KeyboardEvent.key` names. Keys do
    /// nothing while the viewer is closed.
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        match key {
            "Escape" => {
                self.close();
                KeyOutcome::Closed
            }
            "ArrowLeft" => KeyOutcome::Showed(self.prev()),
            "ArrowRight" => KeyOutcome::Showed(self.next()),
            _ => KeyOutcome::Ignored,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut lightbox = Lightbox::new(3).unwrap();
        assert_eq!(lightbox.handle_key("ArrowRight"), KeyOutcome::Ignored);
        assert_eq!(lightbox.handle_key("Escape"), KeyOutcome::Ignored);
        assert_eq!(lightbox.current(), 0);
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let mut lightbox = Lightbox::new(3).unwrap();
        lightbox.open_at(0);
        assert_eq!(lightbox.handle_key("ArrowLeft"), KeyOutcome::Showed(2));
        assert_eq!(lightbox.handle_key("ArrowRight"), KeyOutcome::Showed(0));
        assert_eq!(lightbox.handle_key("ArrowRight"), KeyOutcome::Showed(1));
    }

    #[test]
    fn test_escape_closes() {
        let mut lightbox = Lightbox::new(2).unwrap();
        lightbox.open_at(1);
        assert_eq!(lightbox.handle_key("Escape"), KeyOutcome::Closed);
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current(), 1);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut lightbox = Lightbox::new(2).unwrap();
        lightbox.open_at(0);
        assert_eq!(lightbox.handle_key("Enter"), KeyOutcome::Ignored);
        assert!(lightbox.is_open());
    }

    #[test]
    fn test_open_at_out_of_range() {
        let mut lightbox = Lightbox::new(2).unwrap();
        assert!(lightbox.open_at(2).is_none());
        assert!(!lightbox.is_open());
    }
}
