//! Active-section detection against the current viewport.
//!
//! A section qualifies when its top edge, relative to the viewport, lies in
//! the upper half-window `[0, height / 2)`. Positions are derived on demand
//! from the host-supplied document rows and the viewport offset; nothing is
//! cached between evaluations.
//!
//! The scan deliberately does not stop at the first qualifying section: each
//! qualifying section that is not already marked triggers a full
//! clear-then-mark transition, so a frame where several sections qualify
//! settles on the last unmarked qualifier. This mirrors the behavior the
//! viewer was specified against; see the regression test at the bottom
//! before changing it.

use scrollspy_types::Viewport;
use tracing::debug;

use crate::nav::NavBar;
use crate::registry::SectionRegistry;

/// Re-evaluates the active section for the given viewport.
///
/// `tops` holds each section's document row, aligned with registry order.
/// If no section qualifies, the previous active state is left unchanged
/// (sticky). Returns whether any transition occurred.
pub fn evaluate(
    registry: &mut SectionRegistry,
    nav: &mut NavBar,
    tops: &[u16],
    view: Viewport,
) -> bool {
    let half_window = i32::from(view.height / 2);
    let mut changed = false;

    for idx in 0..registry.len().min(tops.len()) {
        let relative_top = i32::from(tops[idx]) - i32::from(view.offset);
        let qualifies = relative_top >= 0 && relative_top < half_window;
        if qualifies && !registry.is_active(idx) {
            registry.clear_active();
            registry.mark_active(idx);
            nav.clear_active();
            if let Some(id) = registry.id(idx) {
                nav.mark_active_by_target(id);
                debug!(section = id, offset = view.offset, "active section changed");
            }
            changed = true;
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use scrollspy_types::{Section, Viewport};

    use super::evaluate;
    use crate::nav::NavBar;
    use crate::registry::SectionRegistry;

    fn fixture(ids: &[&str]) -> (SectionRegistry, NavBar) {
        let sections: Vec<Section> = ids
            .iter()
            .map(|id| Section {
                id: (*id).to_string(),
                label: (*id).to_string(),
                body: vec![],
            })
            .collect();
        let registry = SectionRegistry::from_sections(&sections);
        let nav = NavBar::build(&registry);
        (registry, nav)
    }

    #[test]
    fn section_in_half_window_becomes_active() {
        let (mut registry, mut nav) = fixture(&["a", "b", "c"]);
        let tops = [0, 40, 80];

        // Offset 35: section "b" sits at relative row 5, inside [0, 10).
        let changed = evaluate(&mut registry, &mut nav, &tops, Viewport::new(35, 20));
        assert!(changed);
        assert_eq!(registry.active_index(), Some(1));
        assert_eq!(nav.active_index(), Some(1));
    }

    #[test]
    fn half_window_bounds_are_inclusive_exclusive() {
        let (mut registry, mut nav) = fixture(&["a"]);

        // Relative top exactly 0 qualifies.
        assert!(evaluate(&mut registry, &mut nav, &[50], Viewport::new(50, 20)));

        // Relative top equal to height/2 does not.
        let (mut registry, mut nav) = fixture(&["a"]);
        assert!(!evaluate(&mut registry, &mut nav, &[60], Viewport::new(50, 20)));

        // Negative relative top (section scrolled past) does not.
        let (mut registry, mut nav) = fixture(&["a"]);
        assert!(!evaluate(&mut registry, &mut nav, &[40], Viewport::new(50, 20)));
    }

    #[test]
    fn active_state_is_sticky_when_nothing_qualifies() {
        let (mut registry, mut nav) = fixture(&["a", "b"]);
        let tops = [0, 100];

        assert!(evaluate(&mut registry, &mut nav, &tops, Viewport::new(0, 30)));
        assert_eq!(registry.active_index(), Some(0));

        // Scroll to a dead zone between sections: no qualifier, marker stays.
        assert!(!evaluate(&mut registry, &mut nav, &tops, Viewport::new(50, 30)));
        assert_eq!(registry.active_index(), Some(0));
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn at_most_one_marker_after_any_evaluation() {
        let (mut registry, mut nav) = fixture(&["a", "b", "c", "d"]);
        let tops = [0, 5, 10, 200];

        evaluate(&mut registry, &mut nav, &tops, Viewport::new(0, 40));
        assert_eq!(registry.iter().filter(|s| s.active).count(), 1);
        assert_eq!(nav.entries().iter().filter(|e| e.active).count(), 1);
    }

    #[test]
    fn multi_qualifier_frame_settles_on_last_unmarked() {
        // Both "a" and "b" sit inside the half-window. The scan does not
        // stop at the first match, so the transition lands on "b".
        let (mut registry, mut nav) = fixture(&["a", "b"]);
        let tops = [2, 8];

        evaluate(&mut registry, &mut nav, &tops, Viewport::new(0, 40));
        assert_eq!(registry.active_index(), Some(1));
        assert_eq!(nav.active_index(), Some(1));

        // A second pass over the same frame re-marks "a" first (it is no
        // longer marked), then "b" again. Still exactly one marker.
        evaluate(&mut registry, &mut nav, &tops, Viewport::new(0, 40));
        assert_eq!(registry.active_index(), Some(1));
        assert_eq!(registry.iter().filter(|s| s.active).count(), 1);
    }

    #[test]
    fn tops_shorter_than_registry_are_tolerated() {
        let (mut registry, mut nav) = fixture(&["a", "b"]);
        assert!(evaluate(&mut registry, &mut nav, &[0], Viewport::new(0, 20)));
        assert_eq!(registry.active_index(), Some(0));
    }
}
