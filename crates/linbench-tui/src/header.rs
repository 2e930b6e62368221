//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, dimension: usize, repetitions: usize) {
    let theme = ColorTheme::default();
    let text = vec![Line::from(vec![
        Span::styled("linbench", theme.header_style()),
        Span::raw(format!(
            " | n={dimension} | k={repetitions} | solver: LU | sequential vs pooled"
        )),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" linbench ");
    frame.render_widget(Paragraph::new(text).block(block), area);
}
