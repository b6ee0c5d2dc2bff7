//! Auto-advancing testimonial rotation.
//!
//! The rotator never touches a clock. It tells its host when to start,
//! restart or stop a repeating timer via [`TimerCommand`], and each timer
//! it asks for carries a generation number so that a tick delivered by a
//! timer that has since been replaced is ignored.

use core::time::Duration;

use crate::cycle::Cycle;

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// What the host should do with its repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Cancel any running timer, then start one that calls
    /// [`Rotator::tick`] with `generation` every `every`.
    Start {
        /// Tick period.
        every: Duration,
        /// Value to pass back to [`Rotator::tick`].
        generation: u64,
    },
    /// Cancel the running timer.
    Stop,
}

/// Cyclic index with an owned auto-advance schedule.
#[derive(Debug, Clone)]
pub struct Rotator {
    cycle: Cycle,
    interval: Duration,
    generation: u64,
    running: bool,
}

impl Rotator {
    /// Rotator over `len` items, starting at 0 with no timer running.
    /// Returns `None` when there is nothing to rotate.
    #[must_use]
    pub fn new(len: usize, interval: Duration) -> Option<Self> {
        Some(Self {
            cycle: Cycle::new(len)?,
            interval,
            generation: 0,
            running: false,
        })
    }

    /// Index of the item on display.
    #[must_use]
    pub const fn active(&self) -> usize {
        self.cycle.index()
    }

    /// Whether a schedule is live.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Begin (or restart) auto-advance.
    pub const fn start(&mut self) -> TimerCommand {
        self.generation += 1;
        self.running = true;
        TimerCommand::Start {
            every: self.interval,
            generation: self.generation,
        }
    }

    /// Halt auto-advance.
    pub const fn stop(&mut self) -> TimerCommand {
        self.generation += 1;
        self.running = false;
        TimerCommand::Stop
    }

    /// Handle a timer tick. Ticks from a superseded or stopped schedule
    /// return `None` and change nothing.
    pub fn tick(&mut self, generation: u64) -> Option<usize> {
        if !self.running || generation != self.generation {
            tracing::trace!(generation, current = self.generation, "stale rotator tick");
            return None;
        }
        Some(self.cycle.next())
    }

    /// Manual selection: show `index` and restart the schedule so the next
    /// automatic advance is a full interval away.
    ///
    /// Out-of-range indices are ignored and return `None`.
    pub fn select(&mut self, index: usize) -> Option<(usize, TimerCommand)> {
        let index = self.cycle.select(index)?;
        Some((index, self.start()))
    }
}
