//! Application state for the viewer.
//!
//! `App` owns the engine, the measured layout, and the scroll position, and
//! translates raw input into engine events. It performs no terminal I/O of
//! its own, so tests drive it with synthetic key/mouse events and a
//! simulated clock.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use scrollspy_engine::{EngineConfig, PageEngine};
use scrollspy_types::{Effect, Page, Viewport};

use crate::layout::PageLayout;

/// Duration of the smooth-scroll offset tween. Kept below the engine's
/// settle delay so the viewport is parked before re-evaluation resumes.
const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(350);

/// Rows moved per mouse-wheel notch.
const WHEEL_STEP: i32 = 3;

/// A fixed-duration eased tween between two scroll offsets.
///
/// Stands in for the browser's native smooth scroll: the runtime samples it
/// on every tick, and each sampled step is reported to the engine as an
/// ordinary scroll event.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    fn new(from: u16, to: u16, started: Instant) -> Self {
        Self {
            from,
            to,
            started,
            duration: SMOOTH_SCROLL_DURATION,
        }
    }

    /// Offset at `now`, eased (cubic ease-out).
    fn sample(&self, now: Instant) -> u16 {
        if now <= self.started {
            return self.from;
        }
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let t = (elapsed / self.duration.as_secs_f32()).min(1.0);
        let eased = 1.0 - (1.0 - t).powi(3);
        let span = f32::from(self.to) - f32::from(self.from);
        (f32::from(self.from) + span * eased).round() as u16
    }

    fn is_done(&self, now: Instant) -> bool {
        now >= self.started + self.duration
    }
}

/// Viewer state: engine, layout, scroll position, and render-time hit areas.
#[derive(Debug)]
pub struct App {
    pub page: Page,
    pub engine: PageEngine,
    pub layout: PageLayout,
    /// First visible document row.
    pub offset: u16,
    frame_width: u16,
    frame_height: u16,
    animation: Option<ScrollAnimation>,
    /// Per-entry nav hit areas, recorded at render time. Empty while the
    /// nav bar is hidden.
    pub nav_areas: Vec<Rect>,
    /// Scroll-to-top control hit area, when shown.
    pub top_area: Option<Rect>,
    pub should_quit: bool,
}

impl App {
    pub fn new(page: Page, config: EngineConfig) -> Self {
        let engine = PageEngine::new(&page.sections, config);
        Self {
            page,
            engine,
            layout: PageLayout::default(),
            offset: 0,
            frame_width: 0,
            frame_height: 0,
            animation: None,
            nav_areas: Vec::new(),
            top_area: None,
            should_quit: false,
        }
    }

    /// Re-measures the document for a new terminal size and hands the fresh
    /// section rows to the engine.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.frame_width = width;
        self.frame_height = height;
        self.layout = PageLayout::measure(&self.page, width);
        self.engine.set_section_tops(self.layout.tops.clone());
        self.offset = self.offset.min(self.layout.max_offset(self.body_height()));
    }

    /// Rows available to the document body: the nav bar claims the top row
    /// only while visible (display toggle, not a reserved slot).
    pub fn body_height(&self) -> u16 {
        let nav_row = u16::from(self.engine.nav_visible() && !self.engine.nav().is_empty());
        self.frame_height.saturating_sub(nav_row)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.offset, self.body_height())
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the runtime should tick fast: an animation is in flight or
    /// an engine timer is pending.
    pub fn needs_fast_tick(&self) -> bool {
        self.animation.is_some() || self.engine.next_deadline().is_some()
    }

    /// Routes a key event. Returns whether a render is needed.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                true
            }
            KeyCode::Up => self.user_scroll(-1, now),
            KeyCode::Down => self.user_scroll(1, now),
            KeyCode::PageUp => self.user_scroll(-i32::from(self.body_height()), now),
            KeyCode::PageDown => self.user_scroll(i32::from(self.body_height()), now),
            KeyCode::Home => {
                let delta = -i32::from(self.offset);
                self.user_scroll(delta, now)
            }
            KeyCode::End => {
                let max = self.layout.max_offset(self.body_height());
                let delta = i32::from(max) - i32::from(self.offset);
                self.user_scroll(delta, now)
            }
            KeyCode::Char('t') => {
                self.activate_top(now);
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = usize::from(c as u8 - b'1');
                self.activate_nav(index, now);
                true
            }
            _ => false,
        }
    }

    /// Routes a mouse event. Returns whether a render is needed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.user_scroll(WHEEL_STEP, now),
            MouseEventKind::ScrollUp => self.user_scroll(-WHEEL_STEP, now),
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                if let Some(index) = self.nav_areas.iter().position(|area| area.contains(position)) {
                    self.activate_nav(index, now);
                    return true;
                }
                if self.top_area.is_some_and(|area| area.contains(position)) {
                    self.activate_top(now);
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    /// Advances the animation (each step is a scroll event) and polls the
    /// engine timers. Returns whether a render is needed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(animation) = self.animation {
            let sampled = animation.sample(now);
            if sampled != self.offset {
                self.offset = sampled;
                self.engine.on_scroll(self.viewport(), now);
                changed = true;
            }
            if animation.is_done(now) {
                self.animation = None;
            }
        }
        changed |= self.engine.on_tick(self.viewport(), now);
        changed
    }

    /// Direct user scrolling: cancels any tween in flight, moves the offset,
    /// and reports the scroll event.
    fn user_scroll(&mut self, delta: i32, now: Instant) -> bool {
        self.animation = None;
        let max = i32::from(self.layout.max_offset(self.body_height()));
        let next = (i32::from(self.offset) + delta).clamp(0, max) as u16;
        self.offset = next;
        self.engine.on_scroll(self.viewport(), now);
        true
    }

    fn activate_nav(&mut self, index: usize, now: Instant) {
        let effects = self.engine.on_nav_activated(index, now);
        self.apply_effects(&effects, now);
    }

    fn activate_top(&mut self, now: Instant) {
        let effects = self.engine.on_top_activated();
        self.apply_effects(&effects, now);
    }

    fn apply_effects(&mut self, effects: &[Effect], now: Instant) {
        for effect in effects {
            match *effect {
                Effect::ScrollTo(row) => {
                    let target = row.min(self.layout.max_offset(self.body_height()));
                    self.animation = Some(ScrollAnimation::new(self.offset, target, now));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::layout::Rect;
    use scrollspy_engine::EngineConfig;
    use scrollspy_types::{Page, Section};

    use super::App;

    fn page(rows_per_section: usize) -> Page {
        let sections = ["intro", "features", "pricing", "faq"]
            .iter()
            .map(|id| Section {
                id: (*id).to_string(),
                label: (*id).to_string(),
                body: (0..rows_per_section).map(|i| format!("{id} line {i}")).collect(),
            })
            .collect();
        Page {
            title: "Demo".into(),
            sections,
        }
    }

    fn app() -> App {
        let mut app = App::new(page(30), EngineConfig::default());
        app.resize(80, 24);
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_scrolling_moves_offset_and_shows_nav() {
        let t0 = Instant::now();
        let mut app = app();

        assert!(app.handle_key(key(KeyCode::Down), t0));
        assert_eq!(app.offset, 1);
        assert!(app.engine.nav_visible());

        app.handle_key(key(KeyCode::PageDown), t0);
        assert!(app.offset > 1);

        app.handle_key(key(KeyCode::Home), t0);
        assert_eq!(app.offset, 0);

        app.handle_key(key(KeyCode::End), t0);
        assert_eq!(app.offset, app.layout.max_offset(app.body_height()));
        // Scrolling up past the top clamps.
        app.handle_key(key(KeyCode::Home), t0);
        app.handle_key(key(KeyCode::Up), t0);
        assert_eq!(app.offset, 0);
    }

    #[test]
    fn nav_activation_tweens_to_the_section_row() {
        let t0 = Instant::now();
        let mut app = app();
        let target_row = app.layout.tops[2];

        app.handle_key(key(KeyCode::Char('3')), t0);
        assert!(app.is_animating());
        assert!(app.engine.is_suppressed());

        // Mid-flight the offset is strictly between the endpoints.
        app.on_tick(t0 + Duration::from_millis(150));
        assert!(app.offset > 0 && app.offset < target_row);

        // After the tween duration the viewport is parked on the target.
        app.on_tick(t0 + Duration::from_millis(400));
        assert_eq!(app.offset, target_row);
        assert!(!app.is_animating());
        assert!(app.engine.is_suppressed(), "settle delay has not elapsed yet");

        // Settle: suppression drops and the clicked section is highlighted.
        app.on_tick(t0 + Duration::from_millis(500));
        assert!(!app.engine.is_suppressed());
        assert_eq!(app.engine.active_section(), Some(2));
    }

    #[test]
    fn digit_beyond_nav_len_is_ignored() {
        let t0 = Instant::now();
        let mut app = app();
        assert!(app.handle_key(key(KeyCode::Char('9')), t0));
        assert!(!app.is_animating());
        assert!(!app.engine.is_suppressed());
    }

    #[test]
    fn user_scroll_cancels_a_running_tween() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')), t0);
        assert!(app.is_animating());

        app.handle_key(key(KeyCode::Down), t0 + Duration::from_millis(50));
        assert!(!app.is_animating());
        // Suppression is timer-driven and survives the cancelled tween.
        assert!(app.engine.is_suppressed());
    }

    #[test]
    fn clicks_hit_test_against_recorded_areas() {
        let t0 = Instant::now();
        let mut app = app();
        // Areas as the renderer would have recorded them.
        app.nav_areas = vec![Rect::new(0, 0, 8, 1), Rect::new(8, 0, 10, 1)];
        app.top_area = Some(Rect::new(72, 23, 7, 1));
        app.offset = 50;

        let click = |column, row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };

        assert!(app.handle_mouse(click(9, 0), t0));
        assert!(app.engine.is_suppressed(), "nav entry click starts a programmatic scroll");

        let mut app = self::app();
        app.top_area = Some(Rect::new(72, 23, 7, 1));
        app.offset = 50;
        assert!(app.handle_mouse(click(74, 23), t0));
        assert!(!app.engine.is_suppressed(), "top control is independent of suppression");
        assert!(app.is_animating());

        // A click on empty space does nothing.
        assert!(!app.handle_mouse(click(40, 10), t0));
    }

    #[test]
    fn wheel_scrolling_steps_and_reports() {
        let t0 = Instant::now();
        let mut app = app();
        let wheel = |kind| MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };

        app.handle_mouse(wheel(MouseEventKind::ScrollDown), t0);
        assert_eq!(app.offset, 3);
        app.handle_mouse(wheel(MouseEventKind::ScrollUp), t0);
        assert_eq!(app.offset, 0);
    }

    #[test]
    fn resize_remeasures_and_clamps() {
        let mut app = app();
        let t0 = Instant::now();
        app.handle_key(key(KeyCode::End), t0);
        let tall_offset = app.offset;

        // A much taller terminal leaves less to scroll.
        app.resize(80, 100);
        assert!(app.offset <= tall_offset);
        assert_eq!(app.layout.tops.len(), 4);
    }
}
