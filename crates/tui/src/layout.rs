//! Document layout measurement.
//!
//! Wraps section bodies to the content width and derives each section's
//! document row (the row of its header line). The engine consumes the row
//! table for active-section detection; rendering consumes the flat line
//! list. Re-measured from scratch on every resize, so rows are always
//! consistent with what is on screen.

use scrollspy_types::Page;

/// What a rendered document line is, for styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Section header; carries the section index for active highlighting.
    Header(usize),
    Body,
    Blank,
}

/// One pre-wrapped document line.
#[derive(Debug, Clone)]
pub struct RenderLine {
    pub text: String,
    pub kind: LineKind,
}

/// The measured document: flat line list plus per-section document rows.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<RenderLine>,
    /// Document row of each section's header, aligned with section order.
    pub tops: Vec<u16>,
}

impl PageLayout {
    /// Measures `page` against the given content width.
    pub fn measure(page: &Page, width: u16) -> Self {
        let wrap_width = usize::from(width.max(1));
        let mut lines: Vec<RenderLine> = Vec::new();
        let mut tops: Vec<u16> = Vec::with_capacity(page.sections.len());

        for (idx, section) in page.sections.iter().enumerate() {
            if idx > 0 {
                lines.push(RenderLine {
                    text: String::new(),
                    kind: LineKind::Blank,
                });
            }
            tops.push(row_of(lines.len()));
            lines.push(RenderLine {
                text: section.label.clone(),
                kind: LineKind::Header(idx),
            });
            for raw in &section.body {
                if raw.is_empty() {
                    lines.push(RenderLine {
                        text: String::new(),
                        kind: LineKind::Blank,
                    });
                    continue;
                }
                for piece in textwrap::wrap(raw, wrap_width) {
                    lines.push(RenderLine {
                        text: piece.into_owned(),
                        kind: LineKind::Body,
                    });
                }
            }
        }

        Self { lines, tops }
    }

    /// Total document height in rows.
    pub fn total_height(&self) -> u16 {
        row_of(self.lines.len())
    }

    /// Largest valid scroll offset for the given viewport height.
    pub fn max_offset(&self, viewport_height: u16) -> u16 {
        self.total_height().saturating_sub(viewport_height)
    }
}

/// Row index clamped into `u16` range; documents taller than that scroll to
/// the clamp.
fn row_of(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}
