//! Runtime metrics panel with sysinfo collection.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use sysinfo::System;

use crate::messages::SystemMetrics;

/// Metrics collector using sysinfo.
pub struct MetricsCollector {
    system: System,
    /// Last collected CPU usage (0.0 - 100.0).
    pub cpu_percent: f64,
    /// Last collected memory usage in MB.
    pub memory_mb: f64,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            system: System::new(),
            cpu_percent: 0.0,
            memory_mb: 0.0,
        }
    }

    /// Refresh system metrics.
    #[allow(clippy::cast_precision_loss)]
    pub fn refresh(&mut self) {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();

        let cpus = self.system.cpus();
        if !cpus.is_empty() {
            self.cpu_percent =
                cpus.iter().map(|c| f64::from(c.cpu_usage())).sum::<f64>() / cpus.len() as f64;
        }

        self.memory_mb = self.system.used_memory() as f64 / (1024.0 * 1024.0);
    }

    /// Create a snapshot for sending as a message.
    #[must_use]
    pub fn snapshot(&self) -> SystemMetrics {
        SystemMetrics {
            cpu_percent: self.cpu_percent,
            memory_mb: self.memory_mb,
        }
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the metrics panel.
pub fn render_metrics(
    frame: &mut Frame,
    area: Rect,
    elapsed_secs: f64,
    memory_mb: f64,
    cpu_percent: f64,
) {
    let text = vec![
        Line::raw(format!("Elapsed: {elapsed_secs:.1}s")),
        Line::raw(format!("Memory:  {memory_mb:.1} MB")),
        Line::raw(format!("CPU:     {cpu_percent:.0}%")),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Metrics ")
        .border_style(Style::default().fg(Color::DarkGray));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;

    #[test]
    fn collector_starts_at_zero() {
        let collector = MetricsCollector::new();
        assert!((collector.cpu_percent).abs() < f64::EPSILON);
        assert!((collector.memory_mb).abs() < f64::EPSILON);
    }

    #[test]
    fn collector_refresh() {
        let mut collector = MetricsCollector::new();
        collector.refresh();
        // CPU may be 0 on the first sample; memory must be non-negative.
        assert!(collector.memory_mb >= 0.0);
    }

    #[test]
    fn snapshot_copies_fields() {
        let mut collector = MetricsCollector::new();
        collector.cpu_percent = 50.0;
        collector.memory_mb = 1024.0;

        let snap = collector.snapshot();
        assert!((snap.cpu_percent - 50.0).abs() < f64::EPSILON);
        assert!((snap.memory_mb - 1024.0).abs() < f64::EPSILON);
    }

    #[test]
    fn render_metrics_contains_fields() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal
            .draw(|frame| render_metrics(frame, frame.area(), 42.3, 512.5, 99.0))
            .unwrap();

        let row = |y: u16| -> String {
            (0..frame.buffer.area.width)
                .map(|x| frame.buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(1).contains("Elapsed") && row(1).contains("42.3"));
        assert!(row(2).contains("Memory") && row(2).contains("512.5"));
        assert!(row(3).contains("CPU") && row(3).contains("99"));
    }

    #[test]
    fn render_metrics_small_area() {
        let backend = TestBackend::new(12, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_metrics(frame, frame.area(), 0.0, 0.0, 0.0))
            .unwrap();
    }
}
