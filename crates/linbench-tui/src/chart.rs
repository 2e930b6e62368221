//! Duration comparison bar charts.
//!
//! Two charts: average time per solve and total batch time, each comparing
//! {Sequential, Parallel}.

use std::time::Duration;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

use linbench_orchestration::interfaces::ModeReport;

use crate::format::format_duration;
use crate::styles::ColorTheme;

/// Render the average-duration and total-duration comparison charts.
pub fn render_duration_charts(
    frame: &mut Frame,
    area: Rect,
    sequential: Option<&ModeReport>,
    parallel: Option<&ModeReport>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_chart(
        frame,
        chunks[0],
        " Average per solve ",
        sequential.map(|r| r.average),
        parallel.map(|r| r.average),
    );
    render_chart(
        frame,
        chunks[1],
        " Total batch ",
        sequential.map(|r| r.total),
        parallel.map(|r| r.total),
    );
}

#[allow(clippy::cast_possible_truncation)]
fn render_chart(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    sequential: Option<Duration>,
    parallel: Option<Duration>,
) {
    let theme = ColorTheme::default();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(theme.border_style());

    let (Some(seq), Some(par)) = (sequential, parallel) else {
        let placeholder = Paragraph::new("Waiting for results…").block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let bars = [
        Bar::default()
            .label("Seq".into())
            .value(seq.as_nanos() as u64)
            .text_value(format_duration(seq))
            .style(Style::default().fg(theme.sequential)),
        Bar::default()
            .label("Pool".into())
            .value(par.as_nanos() as u64)
            .text_value(format_duration(par))
            .style(Style::default().fg(theme.parallel)),
    ];

    let chart = BarChart::default()
        .block(block)
        .bar_width(12)
        .bar_gap(3)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
