//! In-run progress gauges, one per execution mode.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use linbench_core::progress::{BatchProgress, ExecutionMode};

use crate::styles::ColorTheme;

/// Render one gauge per mode while a run is in flight.
pub fn render_gauges(
    frame: &mut Frame,
    area: Rect,
    sequential: Option<&BatchProgress>,
    parallel: Option<&BatchProgress>,
) {
    let theme = ColorTheme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_gauge(frame, chunks[0], ExecutionMode::Sequential, sequential, theme.sequential);
    render_gauge(frame, chunks[1], ExecutionMode::Parallel, parallel, theme.parallel);
}

fn render_gauge(
    frame: &mut Frame,
    area: Rect,
    mode: ExecutionMode,
    progress: Option<&BatchProgress>,
    color: ratatui::style::Color,
) {
    let (ratio, title) = match progress {
        Some(p) => (
            p.fraction().clamp(0.0, 1.0),
            format!(" {} {}/{} ", mode.label(), p.completed.min(p.total), p.total),
        ),
        None => (0.0, format!(" {} ", mode.label())),
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(Style::default().fg(color))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}
