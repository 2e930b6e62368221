//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let key = |k: &'static str| Span::styled(k, theme.selected_style());
    let text = vec![Line::from(vec![
        key("Enter"),
        Span::raw(": run | "),
        key("Tab"),
        Span::raw(": field | "),
        key("↑/↓"),
        Span::raw(": adjust | "),
        key("PgUp/PgDn"),
        Span::raw(": ±10 | "),
        key("l"),
        Span::raw(": logs | "),
        key("j/k"),
        Span::raw(": scroll | "),
        key("q"),
        Span::raw(": quit"),
    ])];

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(text).block(block), area);
}
