//! Ordered registry of the page's sections.
//!
//! The registry is read from the page once at engine construction and never
//! grows or shrinks afterwards. It owns the per-section active markers; the
//! invariant is that at most one section is marked at any time, enforced by
//! routing every mark through a clear-then-mark transition.

use scrollspy_types::Section;

/// A section as tracked by the engine: identity, label, and active marker.
#[derive(Debug, Clone)]
pub struct SectionState {
    /// Unique id, the target of the matching nav entry.
    pub id: String,
    /// Nav display label.
    pub label: String,
    /// Whether this section currently carries the active marker.
    pub active: bool,
}

/// Ordered collection of sections, preserving document order.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<SectionState>,
}

impl SectionRegistry {
    /// Builds the registry from the page's sections, preserving order.
    pub fn from_sections(sections: &[Section]) -> Self {
        Self {
            sections: sections
                .iter()
                .map(|section| SectionState {
                    id: section.id.clone(),
                    label: section.label.clone(),
                    active: false,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionState> {
        self.sections.iter()
    }

    /// Returns the section id at `idx`, if in range.
    pub fn id(&self, idx: usize) -> Option<&str> {
        self.sections.get(idx).map(|section| section.id.as_str())
    }

    /// Resolves a section id to its document-order index.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    /// Returns whether the section at `idx` is marked active.
    pub fn is_active(&self, idx: usize) -> bool {
        self.sections.get(idx).is_some_and(|section| section.active)
    }

    /// Index of the currently marked section, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.sections.iter().position(|section| section.active)
    }

    /// Clears the active marker from every section.
    pub fn clear_active(&mut self) {
        for section in &mut self.sections {
            section.active = false;
        }
    }

    /// Marks the section at `idx` active. Callers clear first so that the
    /// at-most-one invariant holds.
    pub fn mark_active(&mut self, idx: usize) {
        if let Some(section) = self.sections.get_mut(idx) {
            section.active = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use scrollspy_types::Section;

    use super::SectionRegistry;

    fn sections(ids: &[&str]) -> Vec<Section> {
        ids.iter()
            .map(|id| Section {
                id: (*id).to_string(),
                label: id.to_uppercase(),
                body: vec![],
            })
            .collect()
    }

    #[test]
    fn preserves_document_order() {
        let registry = SectionRegistry::from_sections(&sections(&["intro", "features", "faq"]));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.id(0), Some("intro"));
        assert_eq!(registry.id(2), Some("faq"));
        assert_eq!(registry.index_of("features"), Some(1));
        assert_eq!(registry.index_of("missing"), None);
    }

    #[test]
    fn clear_then_mark_keeps_single_active() {
        let mut registry = SectionRegistry::from_sections(&sections(&["a", "b", "c"]));
        registry.mark_active(1);
        assert_eq!(registry.active_index(), Some(1));

        registry.clear_active();
        registry.mark_active(2);
        assert_eq!(registry.active_index(), Some(2));
        assert_eq!(registry.iter().filter(|s| s.active).count(), 1);
    }

    #[test]
    fn out_of_range_mark_is_ignored() {
        let mut registry = SectionRegistry::from_sections(&sections(&["a"]));
        registry.mark_active(9);
        assert_eq!(registry.active_index(), None);
    }
}
