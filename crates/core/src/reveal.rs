//! One-shot scroll reveal for `[data-aos]` elements.

/// Tracks which observed elements have already been revealed.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Tracker for `len` elements, none revealed.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            revealed: vec![false; len],
        }
    }

    /// Record an intersection change for element `index`. Returns `true`
    /// exactly once per element: the first time it is seen intersecting.
    /// The caller animates it and stops observing it.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    /// Number of elements revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&seen| seen).count()
    }

    /// Whether every element has been revealed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.revealed.iter().all(|&seen| seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut tracker = RevealTracker::new(2);
        assert!(!tracker.observe(0, false));
        assert!(tracker.observe(0, true));
        assert!(!tracker.observe(0, true));
        assert_eq!(tracker.revealed_count(), 1);
        assert!(!tracker.is_done());

        assert!(tracker.observe(1, true));
        assert!(tracker.is_done());
    }

    #[test]
    fn test_unknown_index_ignored() {
        let mut tracker = RevealTracker::new(1);
        assert!(!tracker.observe(4, true));
        assert_eq!(tracker.revealed_count(), 0);
    }
}
