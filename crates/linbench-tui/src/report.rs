//! Textual per-mode results panel.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use linbench_orchestration::interfaces::ModeReport;

use crate::format::format_duration;
use crate::styles::ColorTheme;

/// One formatted result line per mode.
#[must_use]
pub fn format_mode_line(report: &ModeReport) -> String {
    let mut line = format!(
        "{:<10} avg {:>10}  total {:>10}  ok {}",
        report.mode.label(),
        format_duration(report.average),
        format_duration(report.total),
        report.solved,
    );
    if report.failed > 0 {
        line.push_str(&format!("  failed {}", report.failed));
    }
    line
}

/// Render the results panel.
pub fn render_report(
    frame: &mut Frame,
    area: Rect,
    sequential: Option<&ModeReport>,
    parallel: Option<&ModeReport>,
) {
    let theme = ColorTheme::default();
    let mut text: Vec<Line> = [sequential, parallel]
        .into_iter()
        .flatten()
        .map(|report| Line::raw(format_mode_line(report)))
        .collect();
    if text.is_empty() {
        text.push(Line::raw("No results yet."));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Results ")
        .border_style(theme.border_style());
    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use linbench_core::progress::ExecutionMode;

    fn report(mode: ExecutionMode, failed: usize) -> ModeReport {
        ModeReport {
            mode,
            total: Duration::from_millis(50),
            average: Duration::from_millis(10),
            solved: 5 - failed,
            failed,
        }
    }

    #[test]
    fn mode_line_without_failures_omits_failed() {
        let line = format_mode_line(&report(ExecutionMode::Sequential, 0));
        assert!(line.contains("Sequential"));
        assert!(line.contains("ok 5"));
        assert!(!line.contains("failed"));
    }

    #[test]
    fn mode_line_with_failures_shows_count() {
        let line = format_mode_line(&report(ExecutionMode::Parallel, 2));
        assert!(line.contains("failed 2"));
        assert!(line.contains("ok 3"));
    }

    #[test]
    fn render_empty_and_full() {
        let backend = TestBackend::new(70, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_report(frame, frame.area(), None, None))
            .unwrap();

        let seq = report(ExecutionMode::Sequential, 0);
        let par = report(ExecutionMode::Parallel, 0);
        let frame = terminal
            .draw(|frame| render_report(frame, frame.area(), Some(&seq), Some(&par)))
            .unwrap();

        let row1: String = (0..frame.buffer.area.width)
            .map(|x| frame.buffer[(x, 1)].symbol().to_string())
            .collect();
        let row2: String = (0..frame.buffer.area.width)
            .map(|x| frame.buffer[(x, 2)].symbol().to_string())
            .collect();
        assert!(row1.contains("Sequential"));
        assert!(row2.contains("Parallel"));
    }
}
