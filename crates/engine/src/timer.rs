//! Cancellable single-shot deadline timer.
//!
//! Both engine timers (the smooth-scroll settle delay and the nav-bar quiet
//! debounce) are built on this. Re-arming an armed timer replaces its
//! deadline, which gives debounce semantics for free: every qualifying event
//! pushes the deadline out, and the timer fires only after a gap with no
//! events.

use std::time::Instant;

/// A one-shot timer that fires at most once per arming.
///
/// The timer never schedules anything itself; the host polls it with
/// [`OneShot::fire`] from its tick loop (or a test does, with synthetic
/// instants).
#[derive(Debug, Clone, Copy, Default)]
pub struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    /// Arms (or re-arms) the timer to fire at `at`. Any pending deadline is
    /// replaced.
    pub fn arm(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    /// Cancels a pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns the pending deadline, if any. Hosts use this to pick a tick
    /// interval.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once when `now` has reached the deadline,
    /// disarming the timer. Returns `false` while unarmed or not yet due.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
