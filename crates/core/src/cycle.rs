//! Wrapping index over a fixed, non-empty sequence.

use core::num::NonZeroUsize;

/// A current position in `0..len` that wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    index: usize,
    len: NonZeroUsize,
}

impl Cycle {
    /// Start at index 0. Returns `None` for an empty sequence.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(|len| Self { index: 0, len })
    }

    /// Current index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Sequence length.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len.get()
    }

    /// Step forward, wrapping to 0 after the last index.
    pub const fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len.get();
        self.index
    }

    /// Step back, wrapping to the last index before 0.
    pub const fn prev(&mut self) -> usize {
        let len = self.len.get();
        self.index = (self.index + len - 1) % len;
        self.index
    }

    /// Jump to `index`. Out-of-range indices leave the position unchanged.
    pub const fn select(&mut self, index: usize) -> Option<usize> {
        if index < self.len.get() {
            self.index = index;
            Some(index)
        } else {
            None
        }
    }
}
