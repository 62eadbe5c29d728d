//! Frame rendering.
//!
//! Draws the nav bar (top row, removed entirely while hidden), the document
//! body at the current scroll offset, and the scroll-to-top control overlaid
//! bottom-right. Hit areas for the nav entries and the top control are
//! recorded on the `App` during the draw so mouse handling can test against
//! exactly what was shown.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::layout::LineKind;

const TOP_CONTROL_LABEL: &str = " ^ Top ";

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let nav_visible = app.engine.nav_visible() && !app.engine.nav().is_empty();

    app.nav_areas.clear();
    app.top_area = None;

    let body_area = if nav_visible && area.height > 0 {
        let nav_area = Rect::new(area.x, area.y, area.width, 1);
        render_nav(frame, nav_area, app);
        Rect::new(area.x, area.y + 1, area.width, area.height - 1)
    } else {
        area
    };

    render_body(frame, body_area, app);
    render_top_control(frame, area, app);
}

/// One row of entries, `1:Label` style, active entry highlighted. The page
/// title fills the right end when there is room.
fn render_nav(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut spans: Vec<Span> = Vec::with_capacity(app.engine.nav().len() + 1);
    let mut cursor = area.x;

    for (idx, entry) in app.engine.nav().entries().iter().enumerate() {
        let text = format!(" {}:{} ", idx + 1, entry.label);
        let width = text.width() as u16;
        let style = if entry.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        app.nav_areas.push(Rect::new(cursor, area.y, width, 1));
        cursor = cursor.saturating_add(width);
        spans.push(Span::styled(text, style));
    }

    let used: u16 = cursor.saturating_sub(area.x);
    let title_width = app.page.title.width() as u16;
    let needed = used.saturating_add(title_width).saturating_add(1);
    if !app.page.title.is_empty() && needed <= area.width {
        let pad = area.width - used - title_width;
        spans.push(Span::raw(" ".repeat(usize::from(pad))));
        spans.push(Span::styled(
            app.page.title.clone(),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The visible slice of the measured document. Section headers are bold;
/// the active section's header additionally carries the highlight color.
fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }
    let active = app.engine.active_section();
    let from = usize::from(app.offset).min(app.layout.lines.len());
    let to = (from + usize::from(area.height)).min(app.layout.lines.len());

    let lines: Vec<Line> = app.layout.lines[from..to]
        .iter()
        .map(|line| match line.kind {
            LineKind::Header(idx) => {
                let style = if active == Some(idx) {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                Line::styled(line.text.clone(), style)
            }
            LineKind::Body => Line::raw(line.text.clone()),
            LineKind::Blank => Line::raw(""),
        })
        .collect();

    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}

/// Bottom-right overlay, present only while the engine says shown.
fn render_top_control(frame: &mut Frame, area: Rect, app: &mut App) {
    if !app.engine.top_shown() || area.height == 0 {
        return;
    }
    let width = TOP_CONTROL_LABEL.width() as u16;
    if area.width < width + 1 {
        return;
    }
    let control = Rect::new(
        area.right().saturating_sub(width + 1),
        area.bottom().saturating_sub(1),
        width,
        1,
    );
    frame.render_widget(
        Paragraph::new(TOP_CONTROL_LABEL).style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        control,
    );
    app.top_area = Some(control);
}
