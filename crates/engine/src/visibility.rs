//! Transient visibility of the nav bar and the scroll-to-top control.
//!
//! Two independent machines, both driven by scroll events:
//!
//! - The nav bar is shown on every scroll and hides after a quiet period
//!   with no further scrolling (debounce: each event cancels the pending
//!   hide and re-arms the timer).
//! - The scroll-to-top control is a pure function of the scroll offset:
//!   shown above the threshold, hidden otherwise, no hysteresis.

use std::time::{Duration, Instant};

use crate::timer::OneShot;

/// Visibility state for the nav bar and the scroll-to-top control.
#[derive(Debug, Clone)]
pub struct TransientUi {
    nav_visible: bool,
    quiet: OneShot,
    nav_quiet: Duration,
    top_shown: bool,
    top_threshold: u16,
}

impl TransientUi {
    /// The nav bar starts visible (nothing has scrolled yet, so no quiet
    /// timer is pending); the top control starts hidden.
    pub fn new(nav_quiet: Duration, top_threshold: u16) -> Self {
        Self {
            nav_visible: true,
            quiet: OneShot::default(),
            nav_quiet,
            top_shown: false,
            top_threshold,
        }
    }

    /// Processes one scroll event: forces the nav bar shown, re-arms the
    /// quiet timer, and recomputes the top control from the offset.
    pub fn on_scroll(&mut self, offset: u16, now: Instant) {
        self.nav_visible = true;
        self.quiet.arm(now + self.nav_quiet);
        self.top_shown = offset > self.top_threshold;
    }

    /// Polls the quiet timer; hides the nav bar when it fires. Returns
    /// whether visibility changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.quiet.fire(now) {
            self.nav_visible = false;
            return true;
        }
        false
    }

    pub fn nav_visible(&self) -> bool {
        self.nav_visible
    }

    pub fn top_shown(&self) -> bool {
        self.top_shown
    }

    /// Pending hide deadline, if the quiet timer is armed.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.quiet.deadline()
    }
}
