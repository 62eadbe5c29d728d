//! Engine facade wiring the registry, nav menu, detector, smooth-scroll
//! suppression, and transient-UI visibility together.
//!
//! The front end owns the event loop and the clock; it forwards scroll
//! events, nav/top activations, and periodic ticks here, then reads state
//! back through the accessors when drawing. Effects flow the other way:
//! the engine never moves the viewport, it asks the host to.

use std::time::{Duration, Instant};

use scrollspy_types::{Effect, Section, Viewport};
use tracing::debug;

use crate::detector;
use crate::nav::NavBar;
use crate::registry::SectionRegistry;
use crate::scroller::SmoothScroll;
use crate::visibility::TransientUi;

/// Default settle delay after a programmatic scroll; chosen to exceed the
/// host's smooth-scroll animation duration.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);
/// Default quiet period after which the nav bar auto-hides.
pub const DEFAULT_NAV_QUIET: Duration = Duration::from_millis(4000);
/// Default scroll offset (rows) above which the scroll-to-top control shows.
pub const DEFAULT_TOP_THRESHOLD: u16 = 400;

/// Engine tuning knobs. Defaults match the viewer's standard behavior; the
/// CLI exposes overrides for each.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    pub settle_delay: Duration,
    pub nav_quiet: Duration,
    pub top_threshold: u16,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            nav_quiet: DEFAULT_NAV_QUIET,
            top_threshold: DEFAULT_TOP_THRESHOLD,
        }
    }
}

/// All interaction state for one page.
#[derive(Debug, Clone)]
pub struct PageEngine {
    registry: SectionRegistry,
    nav: NavBar,
    scroller: SmoothScroll,
    ui: TransientUi,
    /// Document row of each section's first line, aligned with registry
    /// order. Supplied by the host after layout and again on every resize.
    tops: Vec<u16>,
    /// Last viewport seen; the forced post-settle evaluation runs against it.
    viewport: Viewport,
}

impl PageEngine {
    /// Builds the registry and the nav menu (once, as a single batch) from
    /// the page's sections.
    pub fn new(sections: &[Section], config: EngineConfig) -> Self {
        let registry = SectionRegistry::from_sections(sections);
        let nav = NavBar::build(&registry);
        Self {
            registry,
            nav,
            scroller: SmoothScroll::new(config.settle_delay),
            ui: TransientUi::new(config.nav_quiet, config.top_threshold),
            tops: Vec::new(),
            viewport: Viewport::default(),
        }
    }

    /// Installs the section document rows measured by the host. Called after
    /// the initial layout and after every reflow.
    pub fn set_section_tops(&mut self, tops: Vec<u16>) {
        self.tops = tops;
    }

    /// Processes one scroll event. The visibility machines always run; the
    /// detector runs unless a programmatic scroll is in flight.
    pub fn on_scroll(&mut self, view: Viewport, now: Instant) {
        self.viewport = view;
        if !self.scroller.is_suppressed() {
            detector::evaluate(&mut self.registry, &mut self.nav, &self.tops, view);
        }
        self.ui.on_scroll(view.offset, now);
    }

    /// Handles activation of the nav entry at `index` (click or key).
    ///
    /// If the entry or its target section no longer resolves, nothing
    /// happens and no effect is returned. Otherwise the suppression flag is
    /// raised first, then the scroll request goes out; ordering matters, or
    /// the detector could run against an in-flight animation frame.
    pub fn on_nav_activated(&mut self, index: usize, now: Instant) -> Vec<Effect> {
        let Some(target) = self.nav.target(index) else {
            return Vec::new();
        };
        let Some(section_idx) = self.registry.index_of(target) else {
            debug!(nav_target = target, "nav target does not resolve to a section");
            return Vec::new();
        };
        let Some(&row) = self.tops.get(section_idx) else {
            return Vec::new();
        };

        self.scroller.begin(now);
        vec![Effect::ScrollTo(row)]
    }

    /// Handles activation of the scroll-to-top control. Independent of the
    /// nav path: the suppression flag is not touched, so the detector keeps
    /// evaluating while the host animates toward the top.
    pub fn on_top_activated(&self) -> Vec<Effect> {
        vec![Effect::ScrollTo(0)]
    }

    /// Polls both timers. When the settle timer fires, the suppression flag
    /// is cleared and one detector evaluation is forced so the highlight
    /// matches the final position. Returns whether visible state changed.
    pub fn on_tick(&mut self, view: Viewport, now: Instant) -> bool {
        self.viewport = view;
        let mut changed = false;
        if self.scroller.settle(now) {
            changed |= detector::evaluate(&mut self.registry, &mut self.nav, &self.tops, view);
        }
        changed |= self.ui.on_tick(now);
        changed
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn sections(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn active_section(&self) -> Option<usize> {
        self.registry.active_index()
    }

    pub fn nav_visible(&self) -> bool {
        self.ui.nav_visible()
    }

    pub fn top_shown(&self) -> bool {
        self.ui.top_shown()
    }

    pub fn is_suppressed(&self) -> bool {
        self.scroller.is_suppressed()
    }

    /// Earliest pending timer deadline, if any. The host uses this to tick
    /// fast only while something is actually scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.scroller.next_deadline(), self.ui.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}
