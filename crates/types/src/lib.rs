//! Shared type definitions for the scrollspy viewer.
//!
//! This crate holds the data model exchanged between the interaction engine
//! and the terminal front end: the page document (`Page`/`Section`), the
//! viewport snapshot fed to the engine on every scroll, and the `Effect`s the
//! engine reports back to the host for execution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error surfaced when loading or validating a page document fails.
#[derive(Debug, Error)]
pub enum PageError {
    /// I/O failure reading the page file.
    #[error("page I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON payload.
    #[error("page parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Two sections share the same id; nav targets would be ambiguous.
    #[error("duplicate section id `{0}`")]
    DuplicateId(String),
    /// A section with no id cannot be targeted by a nav entry.
    #[error("section at index {0} has an empty id")]
    EmptyId(usize),
    /// A section with no nav label would render as a blank menu entry.
    #[error("section `{0}` has an empty nav label")]
    EmptyLabel(String),
}

/// One identifiable content block of the page.
///
/// Sections pre-exist in the loaded document and are read-only to the rest of
/// the system; the engine keeps its own active markers rather than mutating
/// these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier, used as the nav entry target.
    pub id: String,
    /// Display label for the navigation menu.
    #[serde(rename = "nav")]
    pub label: String,
    /// Content lines (pre-wrap). The engine never looks at these; only the
    /// front end does, to measure and render.
    #[serde(default)]
    pub body: Vec<String>,
}

/// A full page document: ordered sections plus a title for the frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Page {
    /// Parses a page from a JSON string and validates section ids/labels.
    ///
    /// An empty section list is allowed: the viewer degrades to an empty
    /// navigation menu rather than refusing the document.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let page: Page = serde_json::from_str(raw)?;
        page.validate()?;
        Ok(page)
    }

    /// Reads and parses a page document from disk.
    pub fn from_path(path: &Path) -> Result<Self, PageError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    fn validate(&self) -> Result<(), PageError> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.sections.len());
        for (idx, section) in self.sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(PageError::EmptyId(idx));
            }
            if section.label.is_empty() {
                return Err(PageError::EmptyLabel(section.id.clone()));
            }
            if seen.contains(&section.id.as_str()) {
                return Err(PageError::DuplicateId(section.id.clone()));
            }
            seen.push(&section.id);
        }
        Ok(())
    }
}

/// Snapshot of the scrollable view at the moment of an event.
///
/// Units are terminal rows. `offset` is the index of the first visible
/// document row; `height` is the number of visible rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub offset: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(offset: u16, height: u16) -> Self {
        Self { offset, height }
    }
}

/// Side effects the engine asks the host to perform.
///
/// The engine never scrolls anything itself; it reports the request and the
/// host decides how to animate it. Scroll progress flows back in through
/// scroll events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Smooth-scroll the view so the given document row is at the top.
    ScrollTo(u16),
}
