//! Navigation menu built from the section registry.
//!
//! Entries are produced once, as a single batch, in section order: the entry
//! vector is constructed complete and installed in one move, so the host
//! renders the finished container rather than watching it grow. An empty
//! registry simply yields an empty menu.

use crate::registry::SectionRegistry;

/// One clickable entry in the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Target section id (same-page anchor).
    pub target: String,
    /// Display label.
    pub label: String,
    /// Whether this entry currently carries the active marker.
    pub active: bool,
}

/// The navigation menu: one entry per section, in section order.
#[derive(Debug, Clone, Default)]
pub struct NavBar {
    entries: Vec<NavEntry>,
}

impl NavBar {
    /// Builds one entry per registered section, preserving order.
    pub fn build(registry: &SectionRegistry) -> Self {
        let entries = registry
            .iter()
            .map(|section| NavEntry {
                target: section.id.clone(),
                label: section.label.clone(),
                active: false,
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the target section id of the entry at `idx`, if in range.
    pub fn target(&self, idx: usize) -> Option<&str> {
        self.entries.get(idx).map(|entry| entry.target.as_str())
    }

    /// Index of the currently marked entry, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.entries.iter().position(|entry| entry.active)
    }

    /// Clears the active marker from every entry.
    pub fn clear_active(&mut self) {
        for entry in &mut self.entries {
            entry.active = false;
        }
    }

    /// Marks the entry whose target matches `id`. A section without a
    /// matching entry is tolerated: the marker is simply not mirrored.
    pub fn mark_active_by_target(&mut self, id: &str) -> bool {
        match self.entries.iter_mut().find(|entry| entry.target == id) {
            Some(entry) => {
                entry.active = true;
                true
            }
            None => false,
        }
    }
}
