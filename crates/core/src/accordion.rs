//! FAQ accordion: at most one item open at a time.

/// Which FAQ item, if any, is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    /// All `len` items collapsed.
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Start with `open` expanded, if it is in range.
    #[must_use]
    pub const fn with_open(len: usize, open: Option<usize>) -> Self {
        let open = match open {
            Some(i) if i < len => Some(i),
            _ => None,
        };
        Self { len, open }
    }

    /// Click on item `index`: an open item collapses (leaving none open),
    /// a closed item opens and every other item collapses.
    ///
    /// Returns the item open afterwards.
    pub const fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return self.open;
        }
        self.open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
        self.open
    }

    /// The expanded item.
    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    /// Whether item `index` is expanded.
    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Number of items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
