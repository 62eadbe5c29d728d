//! Smooth-scroll suppression window.
//!
//! While a programmatic scroll requested from the nav menu is in flight, the
//! detector must not run: intermediate frames would highlight every section
//! the animation passes through. The controller sets the suppression flag
//! synchronously, before the host ever sees the scroll request, and clears
//! it only when the settle timer fires. Activating another entry before the
//! timer expires re-arms it (cancel + reschedule) without touching the
//! in-flight animation.

use std::time::{Duration, Instant};

use crate::timer::OneShot;

/// Tracks the suppression flag and its settle timer.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    suppressed: bool,
    settle: OneShot,
    settle_delay: Duration,
}

impl SmoothScroll {
    /// `settle_delay` is the fixed wait after a programmatic scroll before
    /// active-state re-evaluation resumes; it must exceed the host's scroll
    /// animation duration.
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            suppressed: false,
            settle: OneShot::default(),
            settle_delay,
        }
    }

    /// Whether detector evaluation is currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Begins a programmatic scroll: raises the flag and arms (or re-arms)
    /// the settle timer at `now + settle_delay`.
    pub fn begin(&mut self, now: Instant) {
        self.suppressed = true;
        self.settle.arm(now + self.settle_delay);
    }

    /// Polls the settle timer. Returns `true` exactly once when the delay
    /// has elapsed, after clearing the suppression flag; the caller then
    /// forces one detector evaluation.
    pub fn settle(&mut self, now: Instant) -> bool {
        if self.settle.fire(now) {
            self.suppressed = false;
            return true;
        }
        false
    }

    /// Pending settle deadline, if a scroll is in flight.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.settle.deadline()
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::SmoothScroll;

    const SETTLE: Duration = Duration::from_millis(500);

    #[test]
    fn flag_is_raised_until_settle() {
        let t0 = Instant::now();
        let mut scroller = SmoothScroll::new(SETTLE);
        assert!(!scroller.is_suppressed());

        scroller.begin(t0);
        assert!(scroller.is_suppressed());
        assert!(!scroller.settle(t0 + Duration::from_millis(499)));
        assert!(scroller.is_suppressed());

        assert!(scroller.settle(t0 + SETTLE));
        assert!(!scroller.is_suppressed());
        // One-shot: a later poll does not fire again.
        assert!(!scroller.settle(t0 + Duration::from_secs(2)));
    }

    #[test]
    fn reactivation_rearms_the_settle_timer() {
        let t0 = Instant::now();
        let mut scroller = SmoothScroll::new(SETTLE);
        scroller.begin(t0);
        scroller.begin(t0 + Duration::from_millis(200));

        // The first deadline has passed, but the re-arm moved it.
        assert!(!scroller.settle(t0 + Duration::from_millis(500)));
        assert!(scroller.is_suppressed());
        assert!(scroller.settle(t0 + Duration::from_millis(700)));
        assert!(!scroller.is_suppressed());
    }
}
